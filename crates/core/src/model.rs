//! Model handles and capability interfaces
//!
//! The evaluator sees every value as a [`Model`], a shared handle to a
//! [`TemplateModel`]. What it can do with a handle is discovered through
//! capability accessors (`as_hash`, `as_sequence`, ...); a handle may offer
//! several capabilities at once, and the evaluator must never depend on a
//! concrete model type.
//!
//! "No value" is `Option::<Model>::None`, never a model wrapping null.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::LumenResult;
use crate::hint::TypeHint;
use crate::native::Native;
use crate::number::Number;

/// Shared handle to a model
pub type Model = Arc<dyn TemplateModel>;

/// Identity comparison of two model handles
pub fn same_model(a: &Model, b: &Model) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

/// Root of every model
///
/// Each accessor returns `Some` only for the capabilities the model
/// genuinely supports.
pub trait TemplateModel: fmt::Debug + Send + Sync + 'static {
    /// Short description of the concrete model, used in error messages
    fn kind_name(&self) -> &'static str;

    /// Upcast for concrete-type inspection
    fn as_any(&self) -> &dyn Any;

    /// Keyed lookup
    fn as_hash(&self) -> Option<&dyn HashModel> {
        None
    }

    /// Indexed lookup
    fn as_sequence(&self) -> Option<&dyn SequenceModel> {
        None
    }

    /// Iteration and membership
    fn as_collection(&self) -> Option<&dyn CollectionModel> {
        None
    }

    /// String value
    fn as_scalar(&self) -> Option<&dyn ScalarModel> {
        None
    }

    /// Numeric value
    fn as_number(&self) -> Option<&dyn NumberModel> {
        None
    }

    /// Boolean value
    fn as_boolean(&self) -> Option<&dyn BooleanModel> {
        None
    }

    /// Native object this model adapts
    fn as_adapter(&self) -> Option<&dyn AdapterModel> {
        None
    }

    /// Native object this model wraps
    fn as_wrapper(&self) -> Option<&dyn WrapperModel> {
        None
    }
}

impl dyn TemplateModel {
    /// True if the concrete model type is `T`
    pub fn is<T: TemplateModel>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the concrete model as `T`
    pub fn downcast_ref<T: TemplateModel>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }
}

/// Keyed access to a mapping
pub trait HashModel {
    /// Number of entries
    fn size(&self) -> LumenResult<usize>;

    /// True if there are no entries
    fn is_empty(&self) -> LumenResult<bool> {
        Ok(self.size()? == 0)
    }

    /// Value under `key`; `None` for a missing key
    fn get(&self, key: &str) -> LumenResult<Option<Model>>;

    /// Collection of the keys, as scalar models
    fn keys(&self) -> LumenResult<Model>;

    /// Collection of the values
    fn values(&self) -> LumenResult<Model>;
}

/// Indexed access to an ordered sequence
pub trait SequenceModel {
    /// Number of elements
    fn size(&self) -> LumenResult<usize>;

    /// Element at `index`; `None` when the index is negative or past the end
    fn get(&self, index: i64) -> LumenResult<Option<Model>>;
}

/// Iteration and membership over a collection
pub trait CollectionModel {
    /// Number of elements
    fn size(&self) -> LumenResult<usize>;

    /// True if there are no elements
    fn is_empty(&self) -> LumenResult<bool> {
        Ok(self.size()? == 0)
    }

    /// A fresh iterator positioned before the first element
    fn iterator(&self) -> LumenResult<Box<dyn ModelIterator>>;

    /// True if an element equals the native value behind `probe`
    fn contains(&self, probe: Option<&Model>) -> LumenResult<bool>;

    /// Drain a fresh iterator into a vector
    fn to_vec(&self) -> LumenResult<Vec<Option<Model>>> {
        let mut it = self.iterator()?;
        let mut items = Vec::new();
        while it.has_next()? {
            items.push(it.next()?);
        }
        Ok(items)
    }
}

/// Single-pass cursor over a collection
pub trait ModelIterator: Send {
    /// True if `next` would yield an element; never moves the cursor
    fn has_next(&self) -> LumenResult<bool>;

    /// Advance and return the element
    ///
    /// Fails with `IteratorExhausted` once every element has been returned,
    /// and keeps failing on every later call.
    fn next(&mut self) -> LumenResult<Option<Model>>;
}

/// A string value
pub trait ScalarModel {
    /// The string
    fn get_string(&self) -> LumenResult<String>;
}

/// A number value
pub trait NumberModel {
    /// The number, in its original width
    fn get_number(&self) -> LumenResult<Number>;
}

/// A boolean value
pub trait BooleanModel {
    /// The boolean
    fn get_bool(&self) -> LumenResult<bool>;
}

/// A model backed by a native object
pub trait AdapterModel {
    /// The adapted native object, for the given hint
    ///
    /// Adapters return the very object they were built on; the caller
    /// checks it against the hint.
    fn adapted_object(&self, hint: TypeHint) -> LumenResult<Native>;
}

/// A model that exposes the exact native object it wraps
pub trait WrapperModel {
    /// The wrapped native object
    fn wrapped_object(&self) -> Native;
}

// ============================================================================
// Simple models
// ============================================================================

/// String model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleScalar {
    value: Arc<str>,
}

impl SimpleScalar {
    /// Create a scalar model
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        SimpleScalar {
            value: value.into(),
        }
    }

    /// The string
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl TemplateModel for SimpleScalar {
    fn kind_name(&self) -> &'static str {
        "scalar"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_scalar(&self) -> Option<&dyn ScalarModel> {
        Some(self)
    }
}

impl ScalarModel for SimpleScalar {
    fn get_string(&self) -> LumenResult<String> {
        Ok(self.value.to_string())
    }
}

/// Number model that keeps the original width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleNumber {
    value: Number,
}

impl SimpleNumber {
    /// Create a number model
    pub fn new(value: impl Into<Number>) -> Self {
        SimpleNumber {
            value: value.into(),
        }
    }

    /// The number
    pub fn value(&self) -> Number {
        self.value
    }
}

impl TemplateModel for SimpleNumber {
    fn kind_name(&self) -> &'static str {
        "number"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_number(&self) -> Option<&dyn NumberModel> {
        Some(self)
    }
}

impl NumberModel for SimpleNumber {
    fn get_number(&self) -> LumenResult<Number> {
        Ok(self.value)
    }
}

/// Boolean model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleBoolean {
    value: bool,
}

impl SimpleBoolean {
    /// Create a boolean model
    pub fn new(value: bool) -> Self {
        SimpleBoolean { value }
    }
}

impl TemplateModel for SimpleBoolean {
    fn kind_name(&self) -> &'static str {
        "boolean"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_boolean(&self) -> Option<&dyn BooleanModel> {
        Some(self)
    }
}

impl BooleanModel for SimpleBoolean {
    fn get_bool(&self) -> LumenResult<bool> {
        Ok(self.value)
    }
}

/// Null sentinel model
///
/// Installed as a wrapper's null model, it stands in for null slots so the
/// evaluator can tell "present but null" from "missing". It unwraps to
/// `Native::Null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullModel;

impl NullModel {
    /// A new sentinel handle
    ///
    /// Every call allocates a distinct handle; share one handle to get a
    /// single sentinel identity.
    pub fn shared() -> Model {
        Arc::new(NullModel)
    }
}

impl TemplateModel for NullModel {
    fn kind_name(&self) -> &'static str {
        "null sentinel"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_adapter(&self) -> Option<&dyn AdapterModel> {
        Some(self)
    }
}

impl AdapterModel for NullModel {
    fn adapted_object(&self, _hint: TypeHint) -> LumenResult<Native> {
        Ok(Native::Null)
    }
}
