//! Object wrapper for Lumen
//!
//! This crate turns native host values into models and back:
//! - ObjectWrapper: wrapping dispatcher and unwrap entry points
//! - adapters: zero-copy views over maps, lists, arrays and sets
//! - legacy: deep-copy wrappers for older compatibility versions
//! - compat: compatibility version normalization
//! - ObjectWrapperBuilder / WrapperRegistry: shared, cached wrappers
//! - WrapperSettings: `lumen.toml` configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod builder;
pub mod compat;
pub mod config;
pub mod legacy;
pub mod registry;
pub mod settings;
pub mod unwrap;
pub mod wrapper;

pub use adapters::{ArrayAdapter, CollectionAdapter, ListAdapter, MapAdapter, MapView};
pub use builder::ObjectWrapperBuilder;
pub use compat::{container_adapters_by_default, normalize_compat_version};
pub use config::{WrapperConfig, WrapperKey};
pub use legacy::{SimpleHash, SimpleSequence};
pub use registry::WrapperRegistry;
pub use settings::{WrapperSettings, CONFIG_FILE_NAME};
pub use unwrap::{unwrap_model, unwrap_optional};
pub use wrapper::ObjectWrapper;
