//! Target-type hints for unwrapping
//!
//! A hint names the native shape a caller needs back from a model. The
//! resolver returns the model's own native value when the hint already
//! [accepts](TypeHint::accepts) it, and otherwise tries a lossless coercion
//! within the same family.

use std::fmt;

use crate::native::{ElementKind, Native};
use crate::number::NumberKind;

/// Requested native shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeHint {
    /// No preference; the model's natural native value
    #[default]
    Any,
    /// A map
    Map,
    /// A list
    List,
    /// A set
    Set,
    /// A list or a set
    Collection,
    /// An array with the given element kind
    Array(ElementKind),
    /// A string
    String,
    /// A single character
    Char,
    /// A boolean
    Bool,
    /// A number of exactly this width
    Number(NumberKind),
}

impl TypeHint {
    /// True if `native` satisfies this hint without conversion
    ///
    /// Null satisfies every reference-shaped hint but none of the primitive
    /// ones (char, bool, numbers).
    pub fn accepts(&self, native: &Native) -> bool {
        match (self, native) {
            (TypeHint::Any, _) => true,
            (
                TypeHint::Map
                | TypeHint::List
                | TypeHint::Set
                | TypeHint::Collection
                | TypeHint::Array(_)
                | TypeHint::String,
                Native::Null,
            ) => true,
            (TypeHint::Map, Native::Map(_)) => true,
            (TypeHint::List, Native::List(_)) => true,
            (TypeHint::Set, Native::Set(_)) => true,
            (TypeHint::Collection, Native::List(_) | Native::Set(_)) => true,
            (TypeHint::Array(kind), Native::Array(arr)) => arr.element_kind() == *kind,
            (TypeHint::String, Native::String(_)) => true,
            (TypeHint::Char, Native::Char(_)) => true,
            (TypeHint::Bool, Native::Bool(_)) => true,
            (TypeHint::Number(kind), n) => n.as_number().map_or(false, |n| n.kind() == *kind),
            _ => false,
        }
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeHint::Any => f.write_str("any"),
            TypeHint::Map => f.write_str("map"),
            TypeHint::List => f.write_str("list"),
            TypeHint::Set => f.write_str("set"),
            TypeHint::Collection => f.write_str("collection"),
            TypeHint::Array(kind) => write!(f, "array of {}", kind.name()),
            TypeHint::String => f.write_str("string"),
            TypeHint::Char => f.write_str("char"),
            TypeHint::Bool => f.write_str("bool"),
            TypeHint::Number(kind) => f.write_str(kind.name()),
        }
    }
}
