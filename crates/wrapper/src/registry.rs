//! Registry of shared object wrappers
//!
//! Ensures only one wrapper exists per [`WrapperKey`] among the wrappers
//! built through the same registry. The registry holds weak references, so
//! a wrapper is dropped once its last user lets go of it and a later build
//! creates a fresh one.

use std::sync::{Arc, Weak};

use lumen_core::LumenResult;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::builder::config_for_key;
use crate::config::{WrapperConfig, WrapperKey};
use crate::wrapper::ObjectWrapper;

/// Cache of object wrappers keyed by normalized settings
#[derive(Debug, Default)]
pub struct WrapperRegistry {
    wrappers: Mutex<FxHashMap<WrapperKey, Weak<WrapperConfig>>>,
}

impl WrapperRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The live wrapper for `key`, or a newly created one
    ///
    /// The lock is held across creation, so concurrent callers with the
    /// same key always receive the same wrapper.
    pub fn get_or_create(&self, key: WrapperKey) -> LumenResult<ObjectWrapper> {
        let mut wrappers = self.wrappers.lock();

        if let Some(config) = wrappers.get(&key).and_then(Weak::upgrade) {
            debug!(target: "lumen::registry", compat_version = %key.compat_version, "Reusing object wrapper");
            return Ok(ObjectWrapper::from_shared(config));
        }

        let wrapper = ObjectWrapper::new(config_for_key(key)?);
        wrappers.retain(|_, weak| weak.strong_count() > 0);
        wrappers.insert(key, Arc::downgrade(wrapper.shared_config()));
        debug!(
            target: "lumen::registry",
            compat_version = %key.compat_version,
            cached = wrappers.len(),
            "Registered object wrapper"
        );
        Ok(wrapper)
    }

    /// Number of keys with a live wrapper
    pub fn len(&self) -> usize {
        self.wrappers
            .lock()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// True if no wrapper is alive
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every cached wrapper; wrappers already handed out keep working
    pub fn clear(&self) {
        self.wrappers.lock().clear();
    }
}
