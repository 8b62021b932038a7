//! Lumen - object adaptation layer for a template evaluator
//!
//! Lumen exposes native host values (maps, lists, arrays, sets, scalars and
//! null) to an evaluator through a small set of model capabilities: hash,
//! sequence, collection, scalar, number and boolean.
//!
//! # Quick Start
//!
//! ```ignore
//! use lumen::{NativeMap, ObjectWrapperBuilder, Version, WrapperRegistry};
//!
//! let registry = WrapperRegistry::new();
//! let wrapper = ObjectWrapperBuilder::new(Version::CURRENT)?.build(&registry)?;
//!
//! let map = NativeMap::from_entries([("name", "Alice")]);
//! let model = wrapper.wrap(map.clone())?.expect("maps are never null");
//! let name = model.as_hash().unwrap().get("name")?;
//! ```
//!
//! # Architecture
//!
//! - `lumen-core`: native values, model capability traits, errors, versions
//! - `lumen-wrapper`: the object wrapper, its adapters, legacy deep-copy
//!   wrappers, the round-trip resolver and configuration

pub use lumen_core::*;
pub use lumen_wrapper::*;
