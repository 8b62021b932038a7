//! Wrapper configuration
//!
//! A [`WrapperConfig`] is mutable while an environment is being set up and
//! becomes read-only once it is write-protected. [`ObjectWrapper::new`]
//! always write-protects the configuration it takes ownership of, so a
//! shared wrapper can never change behavior under its users.
//!
//! [`ObjectWrapper::new`]: crate::ObjectWrapper::new

use lumen_core::{same_model, LumenError, LumenResult, Model, Version};

use crate::compat::{container_adapters_by_default, normalize_compat_version};

/// The parts of a configuration that decide wrapping behavior
///
/// Two configurations with equal keys wrap identically (the null model
/// aside, which builders never set), so the key is what a
/// [`WrapperRegistry`](crate::WrapperRegistry) caches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WrapperKey {
    /// Normalized compatibility version
    pub compat_version: Version,
    /// Maps, lists and arrays use zero-copy adapters
    pub use_adapters_for_containers: bool,
    /// Sets and other non-list collections use the collection adapter
    pub use_adapters_for_non_list_collections: bool,
}

/// Settings of one object wrapper
#[derive(Debug, Clone)]
pub struct WrapperConfig {
    compat_version: Version,
    use_adapters_for_containers: bool,
    use_adapters_for_non_list_collections: bool,
    null_model: Option<Model>,
    write_protected: bool,
}

impl WrapperConfig {
    /// Create a configuration for a requested compatibility version
    ///
    /// The version is normalized first; the container-adapter flag defaults
    /// to on from `2.3.22`. The non-list collection flag is independent of
    /// the version and defaults to off.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::VersionOutOfRange`] if the version is not
    /// supported.
    pub fn new(requested: Version) -> LumenResult<Self> {
        let compat_version = normalize_compat_version(requested)?;
        Ok(WrapperConfig {
            compat_version,
            use_adapters_for_containers: container_adapters_by_default(compat_version),
            use_adapters_for_non_list_collections: false,
            null_model: None,
            write_protected: false,
        })
    }

    fn check_writable(&self, setting: &'static str) -> LumenResult<()> {
        if self.write_protected {
            return Err(LumenError::WriteProtected { setting });
        }
        Ok(())
    }

    /// Normalized compatibility version
    pub fn compat_version(&self) -> Version {
        self.compat_version
    }

    /// True if maps, lists and arrays are wrapped with adapters
    pub fn use_adapters_for_containers(&self) -> bool {
        self.use_adapters_for_containers
    }

    /// True if sets are wrapped with the collection adapter
    pub fn use_adapters_for_non_list_collections(&self) -> bool {
        self.use_adapters_for_non_list_collections
    }

    /// Model returned for null slots, if any
    pub fn null_model(&self) -> Option<&Model> {
        self.null_model.as_ref()
    }

    /// True once the configuration can no longer change
    pub fn is_write_protected(&self) -> bool {
        self.write_protected
    }

    /// Choose adapters (true) or deep copies (false) for maps, lists and arrays
    pub fn set_use_adapters_for_containers(&mut self, enabled: bool) -> LumenResult<()> {
        self.check_writable("use_adapters_for_containers")?;
        self.use_adapters_for_containers = enabled;
        Ok(())
    }

    /// Choose the collection adapter (true) or a deep-copied sequence (false) for sets
    pub fn set_use_adapters_for_non_list_collections(&mut self, enabled: bool) -> LumenResult<()> {
        self.check_writable("use_adapters_for_non_list_collections")?;
        self.use_adapters_for_non_list_collections = enabled;
        Ok(())
    }

    /// Set the sentinel returned for null slots (`None` for "no value")
    pub fn set_null_model(&mut self, null_model: Option<Model>) -> LumenResult<()> {
        self.check_writable("null_model")?;
        self.null_model = null_model;
        Ok(())
    }

    /// Make the configuration read-only; idempotent
    pub fn write_protect(&mut self) {
        self.write_protected = true;
    }

    /// Caching key of this configuration
    pub fn key(&self) -> WrapperKey {
        WrapperKey {
            compat_version: self.compat_version,
            use_adapters_for_containers: self.use_adapters_for_containers,
            use_adapters_for_non_list_collections: self.use_adapters_for_non_list_collections,
        }
    }
}

impl PartialEq for WrapperConfig {
    /// Equal when the keys match and both use the same null sentinel instance
    fn eq(&self, other: &Self) -> bool {
        let same_null = match (&self.null_model, &other.null_model) {
            (None, None) => true,
            (Some(a), Some(b)) => same_model(a, b),
            _ => false,
        };
        self.key() == other.key() && same_null
    }
}
