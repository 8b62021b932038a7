//! Array adapter, one type for every element kind

use std::any::Any;
use std::sync::Arc;

use lumen_core::{
    AdapterModel, ElementKind, LumenResult, Model, Native, NativeArray, SequenceModel,
    SimpleBoolean, SimpleNumber, SimpleScalar, TemplateModel, TypeHint, WrapperModel,
};

use crate::wrapper::ObjectWrapper;

/// Zero-copy sequence view of a native array
///
/// Primitive elements are boxed into models of their exact kind: numbers
/// keep their width, booleans become [`SimpleBoolean`], chars become
/// one-character [`SimpleScalar`]s. Object elements go through the
/// dispatcher.
#[derive(Debug, Clone)]
pub struct ArrayAdapter {
    array: NativeArray,
    wrapper: ObjectWrapper,
}

impl ArrayAdapter {
    /// Adapt `array`; object elements are wrapped with `wrapper`
    pub fn new(array: NativeArray, wrapper: ObjectWrapper) -> Self {
        ArrayAdapter { array, wrapper }
    }

    /// Element kind of the adapted array
    pub fn component_kind(&self) -> ElementKind {
        self.array.element_kind()
    }

    /// The adapted array
    pub fn native(&self) -> &NativeArray {
        &self.array
    }

    fn box_element(&self, element: Native) -> LumenResult<Option<Model>> {
        let model: Model = match element {
            Native::Byte(v) => Arc::new(SimpleNumber::new(v)),
            Native::Short(v) => Arc::new(SimpleNumber::new(v)),
            Native::Int(v) => Arc::new(SimpleNumber::new(v)),
            Native::Long(v) => Arc::new(SimpleNumber::new(v)),
            Native::Float(v) => Arc::new(SimpleNumber::new(v)),
            Native::Double(v) => Arc::new(SimpleNumber::new(v)),
            Native::Bool(v) => Arc::new(SimpleBoolean::new(v)),
            Native::Char(v) => Arc::new(SimpleScalar::new(v.to_string())),
            other => return self.wrapper.wrap(other),
        };
        Ok(Some(model))
    }
}

impl TemplateModel for ArrayAdapter {
    fn kind_name(&self) -> &'static str {
        "array adapter"
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

impl SequenceModel for ArrayAdapter {
    fn size(&self) -> LumenResult<usize> {
        Ok(self.array.len())
    }

    fn get(&self, index: i64) -> LumenResult<Option<Model>> {
        let element = usize::try_from(index).ok().and_then(|i| self.array.get(i));
        match element {
            Some(element) if self.component_kind() == ElementKind::Object => {
                self.wrapper.wrap(element)
            }
            Some(element) => self.box_element(element),
            None => Ok(None),
        }
    }
}

impl AdapterModel for ArrayAdapter {
    fn adapted_object(&self, _hint: TypeHint) -> LumenResult<Native> {
        Ok(Native::Array(self.array.clone()))
    }
}

impl WrapperModel for ArrayAdapter {
    fn wrapped_object(&self) -> Native {
        Native::Array(self.array.clone())
    }
}
