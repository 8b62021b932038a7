//! List adapter

use std::any::Any;

use lumen_core::{
    AdapterModel, LumenResult, Model, Native, NativeList, SequenceModel, TemplateModel, TypeHint,
    WrapperModel,
};

use crate::wrapper::ObjectWrapper;

/// Zero-copy sequence view of a native list
#[derive(Debug, Clone)]
pub struct ListAdapter {
    list: NativeList,
    wrapper: ObjectWrapper,
}

impl ListAdapter {
    /// Adapt `list`; elements are wrapped with `wrapper`
    pub fn new(list: NativeList, wrapper: ObjectWrapper) -> Self {
        ListAdapter { list, wrapper }
    }

    /// The adapted list
    pub fn native(&self) -> &NativeList {
        &self.list
    }
}

impl TemplateModel for ListAdapter {
    fn kind_name(&self) -> &'static str {
        "list adapter"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_sequence(&self) -> Option<&dyn SequenceModel> {
        Some(self)
    }

    fn as_adapter(&self) -> Option<&dyn AdapterModel> {
        Some(self)
    }

    fn as_wrapper(&self) -> Option<&dyn WrapperModel> {
        Some(self)
    }
}

impl SequenceModel for ListAdapter {
    fn size(&self) -> LumenResult<usize> {
        Ok(self.list.len())
    }

    fn get(&self, index: i64) -> LumenResult<Option<Model>> {
        let element = usize::try_from(index).ok().and_then(|i| self.list.get(i));
        match element {
            Some(element) => self.wrapper.wrap(element),
            None => Ok(None),
        }
    }
}

impl AdapterModel for ListAdapter {
    fn adapted_object(&self, _hint: TypeHint) -> LumenResult<Native> {
        Ok(Native::List(self.list.clone()))
    }
}

impl WrapperModel for ListAdapter {
    fn wrapped_object(&self) -> Native {
        Native::List(self.list.clone())
    }
}
