//! Fixed-length native arrays with a primitive element kind
//!
//! Each array stores its elements unboxed in one of nine representations,
//! so that adapters can report the exact component kind and box elements
//! into width-correct number models.

use parking_lot::RwLock;
use std::sync::Arc;

use super::Native;
use crate::error::{LumenError, LumenResult};
use crate::number::{Number, NumberKind};

/// Element kind of a native array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Arbitrary native values (including nulls and containers)
    Object,
    /// `i8`
    Byte,
    /// `i16`
    Short,
    /// `i32`
    Int,
    /// `i64`
    Long,
    /// `f32`
    Float,
    /// `f64`
    Double,
    /// `bool`
    Boolean,
    /// `char`
    Char,
}

impl ElementKind {
    /// All element kinds (for iteration)
    pub const ALL: [ElementKind; 9] = [
        ElementKind::Object,
        ElementKind::Byte,
        ElementKind::Short,
        ElementKind::Int,
        ElementKind::Long,
        ElementKind::Float,
        ElementKind::Double,
        ElementKind::Boolean,
        ElementKind::Char,
    ];

    /// Native type name of a single element
    pub const fn name(&self) -> &'static str {
        match self {
            ElementKind::Object => "object",
            ElementKind::Byte => "i8",
            ElementKind::Short => "i16",
            ElementKind::Int => "i32",
            ElementKind::Long => "i64",
            ElementKind::Float => "f32",
            ElementKind::Double => "f64",
            ElementKind::Boolean => "bool",
            ElementKind::Char => "char",
        }
    }

    /// Numeric width, for the six numeric kinds
    pub const fn number_kind(&self) -> Option<NumberKind> {
        match self {
            ElementKind::Byte => Some(NumberKind::Byte),
            ElementKind::Short => Some(NumberKind::Short),
            ElementKind::Int => Some(NumberKind::Int),
            ElementKind::Long => Some(NumberKind::Long),
            ElementKind::Float => Some(NumberKind::Float),
            ElementKind::Double => Some(NumberKind::Double),
            _ => None,
        }
    }
}

/// Unboxed array storage
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayData {
    /// Arbitrary native values
    Object(Vec<Native>),
    /// `i8` elements
    Byte(Vec<i8>),
    /// `i16` elements
    Short(Vec<i16>),
    /// `i32` elements
    Int(Vec<i32>),
    /// `i64` elements
    Long(Vec<i64>),
    /// `f32` elements
    Float(Vec<f32>),
    /// `f64` elements
    Double(Vec<f64>),
    /// `bool` elements
    Boolean(Vec<bool>),
    /// `char` elements
    Char(Vec<char>),
}

macro_rules! for_each_data {
    ($data:expr, $items:ident => $body:expr) => {
        match $data {
            ArrayData::Object($items) => $body,
            ArrayData::Byte($items) => $body,
            ArrayData::Short($items) => $body,
            ArrayData::Int($items) => $body,
            ArrayData::Long($items) => $body,
            ArrayData::Float($items) => $body,
            ArrayData::Double($items) => $body,
            ArrayData::Boolean($items) => $body,
            ArrayData::Char($items) => $body,
        }
    };
}

impl ArrayData {
    /// Element kind of this storage
    pub const fn kind(&self) -> ElementKind {
        match self {
            ArrayData::Object(_) => ElementKind::Object,
            ArrayData::Byte(_) => ElementKind::Byte,
            ArrayData::Short(_) => ElementKind::Short,
            ArrayData::Int(_) => ElementKind::Int,
            ArrayData::Long(_) => ElementKind::Long,
            ArrayData::Float(_) => ElementKind::Float,
            ArrayData::Double(_) => ElementKind::Double,
            ArrayData::Boolean(_) => ElementKind::Boolean,
            ArrayData::Char(_) => ElementKind::Char,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        for_each_data!(self, items => items.len())
    }

    /// True if the array has no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Boxed element at `index`
    pub fn get(&self, index: usize) -> Option<Native> {
        match self {
            ArrayData::Object(items) => items.get(index).cloned(),
            ArrayData::Byte(items) => items.get(index).map(|v| Native::Byte(*v)),
            ArrayData::Short(items) => items.get(index).map(|v| Native::Short(*v)),
            ArrayData::Int(items) => items.get(index).map(|v| Native::Int(*v)),
            ArrayData::Long(items) => items.get(index).map(|v| Native::Long(*v)),
            ArrayData::Float(items) => items.get(index).map(|v| Native::Float(*v)),
            ArrayData::Double(items) => items.get(index).map(|v| Native::Double(*v)),
            ArrayData::Boolean(items) => items.get(index).map(|v| Native::Bool(*v)),
            ArrayData::Char(items) => items.get(index).map(|v| Native::Char(*v)),
        }
    }

    /// Build storage of `kind` from boxed values
    ///
    /// Numbers are converted only when the conversion is lossless; a
    /// single-character string is accepted for `char` storage.
    pub fn from_natives(kind: ElementKind, items: Vec<Native>) -> LumenResult<Self> {
        fn collect<T>(
            items: Vec<Native>,
            kind: ElementKind,
            unbox: impl Fn(&Native) -> Option<T>,
        ) -> LumenResult<Vec<T>> {
            items
                .iter()
                .map(|item| {
                    unbox(item).ok_or(LumenError::ElementKindMismatch {
                        expected: kind.name(),
                        actual: item.type_name(),
                    })
                })
                .collect()
        }

        let number = |item: &Native, target: NumberKind| {
            item.as_number().and_then(|n| n.convert(target))
        };

        Ok(match kind {
            ElementKind::Object => ArrayData::Object(items),
            ElementKind::Byte => ArrayData::Byte(collect(items, kind, |n| match number(n, NumberKind::Byte) {
                Some(Number::Byte(v)) => Some(v),
                _ => None,
            })?),
            ElementKind::Short => ArrayData::Short(collect(items, kind, |n| match number(n, NumberKind::Short) {
                Some(Number::Short(v)) => Some(v),
                _ => None,
            })?),
            ElementKind::Int => ArrayData::Int(collect(items, kind, |n| match number(n, NumberKind::Int) {
                Some(Number::Int(v)) => Some(v),
                _ => None,
            })?),
            ElementKind::Long => ArrayData::Long(collect(items, kind, |n| match number(n, NumberKind::Long) {
                Some(Number::Long(v)) => Some(v),
                _ => None,
            })?),
            ElementKind::Float => ArrayData::Float(collect(items, kind, |n| match number(n, NumberKind::Float) {
                Some(Number::Float(v)) => Some(v),
                _ => None,
            })?),
            ElementKind::Double => ArrayData::Double(collect(items, kind, |n| match number(n, NumberKind::Double) {
                Some(Number::Double(v)) => Some(v),
                _ => None,
            })?),
            ElementKind::Boolean => ArrayData::Boolean(collect(items, kind, Native::as_bool)?),
            ElementKind::Char => ArrayData::Char(collect(items, kind, Native::as_char)?),
        })
    }
}

/// Rust element types that map onto an unboxed array representation
pub trait ArrayElement: Sized {
    /// Wrap a vector of elements into array storage
    fn into_array_data(items: Vec<Self>) -> ArrayData;
}

macro_rules! array_element {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ArrayElement for $ty {
                fn into_array_data(items: Vec<Self>) -> ArrayData {
                    ArrayData::$variant(items)
                }
            }
        )*
    };
}

array_element!(
    Native => Object,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    bool => Boolean,
    char => Char,
);

/// Shared handle to a fixed-length native array
///
/// Cloning the handle shares the array; use [`NativeArray::ptr_eq`] to test
/// identity.
#[derive(Debug, Clone)]
pub struct NativeArray {
    inner: Arc<RwLock<ArrayData>>,
}

impl NativeArray {
    /// Create an array from unboxed storage
    pub fn from_data(data: ArrayData) -> Self {
        NativeArray {
            inner: Arc::new(RwLock::new(data)),
        }
    }

    /// Create an object array from anything convertible to native values
    pub fn of_objects<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Native>,
    {
        Self::from_data(ArrayData::Object(items.into_iter().map(Into::into).collect()))
    }

    /// Element kind, fixed at construction
    pub fn element_kind(&self) -> ElementKind {
        self.inner.read().kind()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// True if the array has no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Boxed element at `index`
    pub fn get(&self, index: usize) -> Option<Native> {
        self.inner.read().get(index)
    }

    /// Overwrite the element at `index`
    ///
    /// The value must match the element kind exactly (an `i64` is not
    /// accepted by an `i32` array).
    pub fn set(&self, index: usize, value: impl Into<Native>) -> LumenResult<()> {
        let value = value.into();
        let mut data = self.inner.write();
        let len = data.len();
        if index >= len {
            return Err(LumenError::IndexOutOfBounds { index, len });
        }
        let mismatch = LumenError::ElementKindMismatch {
            expected: data.kind().name(),
            actual: value.type_name(),
        };
        match (&mut *data, value) {
            (ArrayData::Object(items), v) => items[index] = v,
            (ArrayData::Byte(items), Native::Byte(v)) => items[index] = v,
            (ArrayData::Short(items), Native::Short(v)) => items[index] = v,
            (ArrayData::Int(items), Native::Int(v)) => items[index] = v,
            (ArrayData::Long(items), Native::Long(v)) => items[index] = v,
            (ArrayData::Float(items), Native::Float(v)) => items[index] = v,
            (ArrayData::Double(items), Native::Double(v)) => items[index] = v,
            (ArrayData::Boolean(items), Native::Bool(v)) => items[index] = v,
            (ArrayData::Char(items), Native::Char(v)) => items[index] = v,
            _ => return Err(mismatch),
        }
        Ok(())
    }

    /// All elements, boxed
    pub fn to_vec(&self) -> Vec<Native> {
        let data = self.inner.read();
        (0..data.len()).filter_map(|i| data.get(i)).collect()
    }

    /// Copy of the unboxed storage
    pub fn data(&self) -> ArrayData {
        self.inner.read().clone()
    }

    /// True if both handles refer to the same array
    pub fn ptr_eq(&self, other: &NativeArray) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: ArrayElement> From<Vec<T>> for NativeArray {
    fn from(items: Vec<T>) -> Self {
        NativeArray::from_data(T::into_array_data(items))
    }
}
