//! Core types for Lumen
//!
//! This crate defines the vocabulary shared by the adaptation layer and its
//! callers:
//! - Native: dynamic host values with shared, interior-mutable containers
//! - Model: handles exposed to the evaluator, with capability interfaces
//!   (hash, sequence, collection, scalar, number, boolean)
//! - Number: width-preserving numbers
//! - TypeHint: target shapes for unwrapping
//! - Version: compatibility versions
//! - LumenError: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod hint;
pub mod model;
pub mod native;
pub mod number;
pub mod version;

pub use error::{LumenError, LumenResult};
pub use hint::TypeHint;
pub use model::{
    same_model, AdapterModel, BooleanModel, CollectionModel, HashModel, Model, ModelIterator,
    NullModel, NumberModel, ScalarModel, SequenceModel, SimpleBoolean, SimpleNumber,
    SimpleScalar, TemplateModel, WrapperModel,
};
pub use native::{
    ArrayData, ArrayElement, ElementKind, HostObject, MapOrdering, Native, NativeArray,
    NativeList, NativeMap, NativeSet, SetOrdering,
};
pub use number::{Number, NumberKind};
pub use version::Version;
