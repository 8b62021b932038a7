//! The object wrapper: wrapping dispatcher and unwrap entry points
//!
//! [`ObjectWrapper::wrap`] turns a native value into a model handle. The
//! decision policy, in order:
//!
//! 1. null -> the null policy (no value, or the configured sentinel)
//! 2. an existing model -> returned unchanged
//! 3. map / list / array -> zero-copy adapter if container adapters are on,
//!    otherwise a deep-copied [`SimpleHash`] / [`SimpleSequence`]
//! 4. set -> [`CollectionAdapter`] if non-list collection adapters are on,
//!    otherwise a deep-copied [`SimpleSequence`]
//! 5. string, char, number, bool -> simple scalar, number, boolean models
//! 6. opaque host objects -> [`LumenError::UnsupportedType`]

use std::fmt;
use std::sync::Arc;

use lumen_core::{
    LumenError, LumenResult, Model, Native, SimpleBoolean, SimpleNumber, SimpleScalar, TypeHint,
    Version,
};
use tracing::{debug, trace};

use crate::adapters::{ArrayAdapter, CollectionAdapter, ListAdapter, MapAdapter};
use crate::config::WrapperConfig;
use crate::legacy::{SimpleHash, SimpleSequence};
use crate::unwrap::unwrap_model;

/// Shared, read-only object wrapper
///
/// Cheap to clone; all clones share one write-protected
/// [`WrapperConfig`]. Adapters keep a clone to wrap the elements they hand
/// out.
#[derive(Clone)]
pub struct ObjectWrapper {
    config: Arc<WrapperConfig>,
}

impl ObjectWrapper {
    /// Freeze a configuration into a wrapper
    pub fn new(mut config: WrapperConfig) -> Self {
        config.write_protect();
        debug!(
            target: "lumen::wrapper",
            compat_version = %config.compat_version(),
            container_adapters = config.use_adapters_for_containers(),
            non_list_adapters = config.use_adapters_for_non_list_collections(),
            null_model = config.null_model().is_some(),
            "Created object wrapper"
        );
        ObjectWrapper {
            config: Arc::new(config),
        }
    }

    /// Wrapper with the default settings of a compatibility version
    pub fn for_version(requested: Version) -> LumenResult<Self> {
        Ok(Self::new(WrapperConfig::new(requested)?))
    }

    pub(crate) fn from_shared(config: Arc<WrapperConfig>) -> Self {
        ObjectWrapper { config }
    }

    pub(crate) fn shared_config(&self) -> &Arc<WrapperConfig> {
        &self.config
    }

    /// The (write-protected) configuration
    pub fn config(&self) -> &WrapperConfig {
        &self.config
    }

    /// Normalized compatibility version
    pub fn compat_version(&self) -> Version {
        self.config.compat_version()
    }

    /// True if both handles share one configuration instance
    pub fn same_instance(&self, other: &ObjectWrapper) -> bool {
        Arc::ptr_eq(&self.config, &other.config)
    }

    /// Null policy result
    pub fn wrap_null(&self) -> Option<Model> {
        self.config.null_model().cloned()
    }

    /// Wrap a native value
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::UnsupportedType`] for opaque host objects, and
    /// propagates failures from deep-copying nested values.
    pub fn wrap(&self, value: impl Into<Native>) -> LumenResult<Option<Model>> {
        let value = value.into();
        let adapt_containers = self.config.use_adapters_for_containers();
        let model: Model = match value {
            Native::Null => return Ok(self.wrap_null()),
            Native::Model(model) => return Ok(Some(model)),
            Native::Map(map) if adapt_containers => {
                trace!(target: "lumen::wrapper", "Adapting map");
                Arc::new(MapAdapter::new(map, self.clone()))
            }
            Native::Map(map) => {
                trace!(target: "lumen::wrapper", "Copying map into simple hash");
                Arc::new(SimpleHash::from_map(&map, self)?)
            }
            Native::List(list) if adapt_containers => {
                trace!(target: "lumen::wrapper", "Adapting list");
                Arc::new(ListAdapter::new(list, self.clone()))
            }
            Native::List(list) => Arc::new(SimpleSequence::from_natives(list.to_vec(), self)?),
            Native::Array(array) if adapt_containers => {
                trace!(target: "lumen::wrapper", kind = array.element_kind().name(), "Adapting array");
                Arc::new(ArrayAdapter::new(array, self.clone()))
            }
            Native::Array(array) => Arc::new(SimpleSequence::from_natives(array.to_vec(), self)?),
            Native::Set(set) if self.config.use_adapters_for_non_list_collections() => {
                trace!(target: "lumen::wrapper", "Adapting non-list collection");
                Arc::new(CollectionAdapter::new(set, self.clone()))
            }
            Native::Set(set) => {
                trace!(target: "lumen::wrapper", "Copying non-list collection into simple sequence");
                Arc::new(SimpleSequence::from_natives(set.to_vec(), self)?)
            }
            Native::String(s) => Arc::new(SimpleScalar::new(s)),
            Native::Char(c) => Arc::new(SimpleScalar::new(c.to_string())),
            Native::Bool(b) => Arc::new(SimpleBoolean::new(b)),
            Native::Byte(v) => Arc::new(SimpleNumber::new(v)),
            Native::Short(v) => Arc::new(SimpleNumber::new(v)),
            Native::Int(v) => Arc::new(SimpleNumber::new(v)),
            Native::Long(v) => Arc::new(SimpleNumber::new(v)),
            Native::Float(v) => Arc::new(SimpleNumber::new(v)),
            Native::Double(v) => Arc::new(SimpleNumber::new(v)),
            Native::Object(obj) => {
                return Err(LumenError::UnsupportedType(obj.type_name().to_string()))
            }
        };
        Ok(Some(model))
    }

    /// Recover the native value behind a model
    pub fn unwrap(&self, model: &Model) -> LumenResult<Native> {
        unwrap_model(model, TypeHint::Any)
    }

    /// Recover the native value behind a model, shaped by `hint`
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::UnwrapFailed`] if no native value of the hinted
    /// shape can represent the model without losing data.
    pub fn unwrap_as(&self, model: &Model, hint: TypeHint) -> LumenResult<Native> {
        unwrap_model(model, hint)
    }

    /// Like [`unwrap`](Self::unwrap), mapping "no value" to `Native::Null`
    pub fn unwrap_optional(&self, model: Option<&Model>) -> LumenResult<Native> {
        match model {
            Some(model) => self.unwrap(model),
            None => Ok(Native::Null),
        }
    }
}

impl fmt::Debug for ObjectWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectWrapper")
            .field("compat_version", &self.config.compat_version())
            .field("use_adapters_for_containers", &self.config.use_adapters_for_containers())
            .field(
                "use_adapters_for_non_list_collections",
                &self.config.use_adapters_for_non_list_collections(),
            )
            .finish_non_exhaustive()
    }
}
