//! Adapter for non-list collections (sets)

use std::any::Any;

use lumen_core::{
    AdapterModel, CollectionModel, LumenResult, Model, ModelIterator, Native, NativeSet,
    TemplateModel, TypeHint, WrapperModel,
};

use super::cursor::{LiveIterator, LiveSource};
use crate::unwrap::unwrap_optional;
use crate::wrapper::ObjectWrapper;

/// Zero-copy collection view of a native set
///
/// Iterators walk the live set and fail fast if it changes structurally.
/// Membership delegates to the set's own lookup after unwrapping the probe,
/// so a sorted set rejects probes it cannot order.
#[derive(Debug, Clone)]
pub struct CollectionAdapter {
    set: NativeSet,
    wrapper: ObjectWrapper,
}

impl CollectionAdapter {
    /// Adapt `set`; elements are wrapped with `wrapper`
    pub fn new(set: NativeSet, wrapper: ObjectWrapper) -> Self {
        CollectionAdapter { set, wrapper }
    }

    /// The adapted set
    pub fn native(&self) -> &NativeSet {
        &self.set
    }
}

impl TemplateModel for CollectionAdapter {
    fn kind_name(&self) -> &'static str {
        "collection adapter"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_collection(&self) -> Option<&dyn CollectionModel> {
        Some(self)
    }

    fn as_adapter(&self) -> Option<&dyn AdapterModel> {
        Some(self)
    }

    fn as_wrapper(&self) -> Option<&dyn WrapperModel> {
        Some(self)
    }
}

impl CollectionModel for CollectionAdapter {
    fn size(&self) -> LumenResult<usize> {
        Ok(self.set.len())
    }

    fn is_empty(&self) -> LumenResult<bool> {
        Ok(self.set.is_empty())
    }

    fn iterator(&self) -> LumenResult<Box<dyn ModelIterator>> {
        Ok(Box::new(LiveIterator::new(
            LiveSource::Set(self.set.clone()),
            self.wrapper.clone(),
        )))
    }

    fn contains(&self, probe: Option<&Model>) -> LumenResult<bool> {
        let probe = unwrap_optional(probe, TypeHint::Any)?;
        self.set.contains(&probe)
    }
}

impl AdapterModel for CollectionAdapter {
    fn adapted_object(&self, _hint: TypeHint) -> LumenResult<Native> {
        Ok(Native::Set(self.set.clone()))
    }
}

impl WrapperModel for CollectionAdapter {
    fn wrapped_object(&self) -> Native {
        Native::Set(self.set.clone())
    }
}
