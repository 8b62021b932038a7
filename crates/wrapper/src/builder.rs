//! Builder for shared object wrappers
//!
//! ```ignore
//! let registry = WrapperRegistry::new();
//! let wrapper = ObjectWrapperBuilder::new(Version::new(2, 3, 23))?
//!     .use_adapters_for_non_list_collections(true)
//!     .build(&registry)?;
//! ```

use lumen_core::{LumenResult, Version};

use crate::compat::{container_adapters_by_default, normalize_compat_version};
use crate::config::{WrapperConfig, WrapperKey};
use crate::registry::WrapperRegistry;
use crate::wrapper::ObjectWrapper;

/// Builder for [`ObjectWrapper`]
///
/// The version is normalized when the builder is created, so builders for
/// versions on the same breakpoint produce equal keys and share one
/// wrapper through a [`WrapperRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectWrapperBuilder {
    compat_version: Version,
    use_adapters_for_containers: bool,
    use_adapters_for_non_list_collections: bool,
}

impl ObjectWrapperBuilder {
    /// Create a builder with the defaults of `requested`
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::VersionOutOfRange`](lumen_core::LumenError::VersionOutOfRange)
    /// if the version is not supported.
    pub fn new(requested: Version) -> LumenResult<Self> {
        let compat_version = normalize_compat_version(requested)?;
        Ok(Self {
            compat_version,
            use_adapters_for_containers: container_adapters_by_default(compat_version),
            use_adapters_for_non_list_collections: false,
        })
    }

    /// Normalized compatibility version
    pub fn compat_version(&self) -> Version {
        self.compat_version
    }

    /// Use adapters (true) or deep copies (false) for maps, lists and arrays
    pub fn use_adapters_for_containers(mut self, enabled: bool) -> Self {
        self.use_adapters_for_containers = enabled;
        self
    }

    /// Use the collection adapter (true) or a deep copy (false) for sets
    pub fn use_adapters_for_non_list_collections(mut self, enabled: bool) -> Self {
        self.use_adapters_for_non_list_collections = enabled;
        self
    }

    /// Caching key of the wrapper this builder describes
    pub fn key(&self) -> WrapperKey {
        WrapperKey {
            compat_version: self.compat_version,
            use_adapters_for_containers: self.use_adapters_for_containers,
            use_adapters_for_non_list_collections: self.use_adapters_for_non_list_collections,
        }
    }

    /// Return the registry's wrapper for this key, creating it if needed
    pub fn build(self, registry: &WrapperRegistry) -> LumenResult<ObjectWrapper> {
        registry.get_or_create(self.key())
    }

    /// Create a new wrapper that no registry knows about
    pub fn build_uncached(self) -> LumenResult<ObjectWrapper> {
        Ok(ObjectWrapper::new(self.to_config()?))
    }

    pub(crate) fn to_config(self) -> LumenResult<WrapperConfig> {
        config_for_key(self.key())
    }
}

pub(crate) fn config_for_key(key: WrapperKey) -> LumenResult<WrapperConfig> {
    let mut config = WrapperConfig::new(key.compat_version)?;
    config.set_use_adapters_for_containers(key.use_adapters_for_containers)?;
    config.set_use_adapters_for_non_list_collections(key.use_adapters_for_non_list_collections)?;
    Ok(config)
}
