//! Native host values
//!
//! [`Native`] is the dynamic value type the host application hands to the
//! adaptation layer. Scalars are plain values; containers are shared,
//! interior-mutable handles, so two `Native`s can refer to the *same*
//! container (see [`Native::same_instance`]) and mutations made through one
//! handle are visible through every other.
//!
//! ## Equality
//!
//! `PartialEq` compares by content. Numbers of different widths are never
//! equal (`Int(1) != Long(1)`), lists never equal arrays or sets, and floats
//! follow IEEE-754. Models and host objects compare by identity.

pub mod array;
pub mod list;
pub mod map;
pub mod set;

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::model::{same_model, Model};
use crate::number::Number;

pub use array::{ArrayData, ArrayElement, ElementKind, NativeArray};
pub use list::NativeList;
pub use map::{MapOrdering, NativeMap};
pub use set::{NativeSet, SetOrdering};

/// An opaque host object with no model representation
#[derive(Clone)]
pub struct HostObject {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

impl HostObject {
    /// Wrap an arbitrary host value
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        HostObject {
            type_name: std::any::type_name::<T>(),
            value: Arc::new(value),
        }
    }

    /// Rust type name of the wrapped value
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrow the wrapped value as `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }

    /// True if both handles refer to the same host value
    pub fn ptr_eq(&self, other: &HostObject) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for HostObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostObject")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// A native host value
#[derive(Debug, Clone)]
pub enum Native {
    /// Absence of a value
    Null,
    /// Boolean
    Bool(bool),
    /// 8-bit signed integer
    Byte(i8),
    /// 16-bit signed integer
    Short(i16),
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit signed integer
    Long(i64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
    /// Unicode scalar value
    Char(char),
    /// Immutable string
    String(Arc<str>),
    /// Shared map with string keys
    Map(NativeMap),
    /// Shared list
    List(NativeList),
    /// Shared fixed-length array
    Array(NativeArray),
    /// Shared non-list collection
    Set(NativeSet),
    /// A value that is already a model
    Model(Model),
    /// Opaque host object
    Object(HostObject),
}

impl Native {
    /// Native type name, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Native::Null => "null",
            Native::Bool(_) => "bool",
            Native::Byte(_) => "i8",
            Native::Short(_) => "i16",
            Native::Int(_) => "i32",
            Native::Long(_) => "i64",
            Native::Float(_) => "f32",
            Native::Double(_) => "f64",
            Native::Char(_) => "char",
            Native::String(_) => "string",
            Native::Map(_) => "map",
            Native::List(_) => "list",
            Native::Array(_) => "array",
            Native::Set(_) => "set",
            Native::Model(_) => "model",
            Native::Object(_) => "object",
        }
    }

    /// Detailed description, including host object type names
    pub fn describe(&self) -> String {
        match self {
            Native::Object(obj) => format!("object of type {}", obj.type_name()),
            Native::Map(map) => map.shape_name().to_string(),
            Native::Set(set) => set.shape_name().to_string(),
            Native::Array(arr) => format!("array of {}", arr.element_kind().name()),
            other => other.type_name().to_string(),
        }
    }

    /// True for `Native::Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Native::Null)
    }

    /// Boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Native::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Character value; a one-character string also qualifies
    pub fn as_char(&self) -> Option<char> {
        match self {
            Native::Char(c) => Some(*c),
            Native::String(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// String slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Native::String(s) => Some(s),
            _ => None,
        }
    }

    /// Width-tagged number
    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Native::Byte(v) => Some(Number::Byte(v)),
            Native::Short(v) => Some(Number::Short(v)),
            Native::Int(v) => Some(Number::Int(v)),
            Native::Long(v) => Some(Number::Long(v)),
            Native::Float(v) => Some(Number::Float(v)),
            Native::Double(v) => Some(Number::Double(v)),
            _ => None,
        }
    }

    /// Identity comparison
    ///
    /// Containers, models and host objects are the same instance only if
    /// they share storage. Scalars have no identity and compare by value
    /// and type.
    pub fn same_instance(&self, other: &Native) -> bool {
        match (self, other) {
            (Native::Map(a), Native::Map(b)) => a.ptr_eq(b),
            (Native::List(a), Native::List(b)) => a.ptr_eq(b),
            (Native::Array(a), Native::Array(b)) => a.ptr_eq(b),
            (Native::Set(a), Native::Set(b)) => a.ptr_eq(b),
            (Native::Model(a), Native::Model(b)) => same_model(a, b),
            (Native::Object(a), Native::Object(b)) => a.ptr_eq(b),
            (a, b) => a == b,
        }
    }

    /// Natural ordering between two values of the same scalar type
    ///
    /// Returns `None` when the values are not mutually comparable: different
    /// types (including different numeric widths), nulls, or containers.
    pub fn natural_cmp(&self, other: &Native) -> Option<Ordering> {
        match (self, other) {
            (Native::Bool(a), Native::Bool(b)) => Some(a.cmp(b)),
            (Native::Byte(a), Native::Byte(b)) => Some(a.cmp(b)),
            (Native::Short(a), Native::Short(b)) => Some(a.cmp(b)),
            (Native::Int(a), Native::Int(b)) => Some(a.cmp(b)),
            (Native::Long(a), Native::Long(b)) => Some(a.cmp(b)),
            (Native::Float(a), Native::Float(b)) => Some(a.total_cmp(b)),
            (Native::Double(a), Native::Double(b)) => Some(a.total_cmp(b)),
            (Native::Char(a), Native::Char(b)) => Some(a.cmp(b)),
            (Native::String(a), Native::String(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl PartialEq for Native {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Native::Null, Native::Null) => true,
            (Native::Bool(a), Native::Bool(b)) => a == b,
            (Native::Byte(a), Native::Byte(b)) => a == b,
            (Native::Short(a), Native::Short(b)) => a == b,
            (Native::Int(a), Native::Int(b)) => a == b,
            (Native::Long(a), Native::Long(b)) => a == b,
            (Native::Float(a), Native::Float(b)) => a == b,
            (Native::Double(a), Native::Double(b)) => a == b,
            (Native::Char(a), Native::Char(b)) => a == b,
            (Native::String(a), Native::String(b)) => a == b,
            (Native::Map(a), Native::Map(b)) => {
                if a.ptr_eq(b) {
                    return true;
                }
                // Snapshot one side so no two locks are held at once
                let entries = a.entries();
                entries.len() == b.len()
                    && entries
                        .iter()
                        .all(|(k, v)| b.get(k).map_or(false, |other| &other == v))
            }
            (Native::List(a), Native::List(b)) => a.ptr_eq(b) || a.to_vec() == b.to_vec(),
            (Native::Array(a), Native::Array(b)) => a.ptr_eq(b) || a.data() == b.data(),
            (Native::Set(a), Native::Set(b)) => {
                if a.ptr_eq(b) {
                    return true;
                }
                let items = a.to_vec();
                items.len() == b.len() && items.iter().all(|v| b.contains(v).unwrap_or(false))
            }
            (Native::Model(a), Native::Model(b)) => same_model(a, b),
            (Native::Object(a), Native::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Native]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Native::Null => f.write_str("null"),
            Native::Bool(b) => write!(f, "{}", b),
            Native::Char(c) => write!(f, "{}", c),
            Native::String(s) => f.write_str(s),
            Native::Map(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.entries().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", k, v)?;
                }
                f.write_str("}")
            }
            Native::List(list) => {
                f.write_str("[")?;
                write_joined(f, &list.to_vec())?;
                f.write_str("]")
            }
            Native::Array(arr) => {
                f.write_str("[")?;
                write_joined(f, &arr.to_vec())?;
                f.write_str("]")
            }
            Native::Set(set) => {
                f.write_str("[")?;
                write_joined(f, &set.to_vec())?;
                f.write_str("]")
            }
            Native::Model(model) => write!(f, "<{}>", model.kind_name()),
            Native::Object(obj) => write!(f, "<{}>", obj.type_name()),
            number => match number.as_number() {
                Some(n) => write!(f, "{}", n),
                None => Ok(()),
            },
        }
    }
}

// ============================================================================
// From implementations for ergonomic construction
// ============================================================================

macro_rules! native_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Native {
                fn from(v: $ty) -> Self {
                    Native::$variant(v)
                }
            }
        )*
    };
}

native_from!(
    bool => Bool,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    char => Char,
    Arc<str> => String,
    NativeMap => Map,
    NativeList => List,
    NativeArray => Array,
    NativeSet => Set,
    Model => Model,
    HostObject => Object,
);

impl From<&str> for Native {
    fn from(s: &str) -> Self {
        Native::String(Arc::from(s))
    }
}

impl From<String> for Native {
    fn from(s: String) -> Self {
        Native::String(Arc::from(s))
    }
}

impl From<()> for Native {
    fn from(_: ()) -> Self {
        Native::Null
    }
}

impl From<Number> for Native {
    fn from(n: Number) -> Self {
        match n {
            Number::Byte(v) => Native::Byte(v),
            Number::Short(v) => Native::Short(v),
            Number::Int(v) => Native::Int(v),
            Number::Long(v) => Native::Long(v),
            Number::Float(v) => Native::Float(v),
            Number::Double(v) => Native::Double(v),
        }
    }
}

impl<T: Into<Native>> From<Option<T>> for Native {
    fn from(v: Option<T>) -> Self {
        v.map_or(Native::Null, Into::into)
    }
}
