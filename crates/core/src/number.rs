//! Width-preserving numbers
//!
//! A [`Number`] remembers the exact primitive width it came from, so that an
//! `i32` array element read through a number model unwraps back to an `i32`
//! and not to a widened `i64` or `f64`.

use std::fmt;

/// Primitive numeric widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// 8-bit signed
    Byte,
    /// 16-bit signed
    Short,
    /// 32-bit signed
    Int,
    /// 64-bit signed
    Long,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
}

impl NumberKind {
    /// Native type name
    pub const fn name(&self) -> &'static str {
        match self {
            NumberKind::Byte => "i8",
            NumberKind::Short => "i16",
            NumberKind::Int => "i32",
            NumberKind::Long => "i64",
            NumberKind::Float => "f32",
            NumberKind::Double => "f64",
        }
    }
}

/// A number tagged with its primitive width
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// 8-bit signed
    Byte(i8),
    /// 16-bit signed
    Short(i16),
    /// 32-bit signed
    Int(i32),
    /// 64-bit signed
    Long(i64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
}

impl Number {
    /// Width of this number
    pub const fn kind(&self) -> NumberKind {
        match self {
            Number::Byte(_) => NumberKind::Byte,
            Number::Short(_) => NumberKind::Short,
            Number::Int(_) => NumberKind::Int,
            Number::Long(_) => NumberKind::Long,
            Number::Float(_) => NumberKind::Float,
            Number::Double(_) => NumberKind::Double,
        }
    }

    /// Integer value, if this is an integral width
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Byte(v) => Some(v as i64),
            Number::Short(v) => Some(v as i64),
            Number::Int(v) => Some(v as i64),
            Number::Long(v) => Some(v),
            Number::Float(_) | Number::Double(_) => None,
        }
    }

    /// Value as `f64` (may round for large `i64`)
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Byte(v) => v as f64,
            Number::Short(v) => v as f64,
            Number::Int(v) => v as f64,
            Number::Long(v) => v as f64,
            Number::Float(v) => v as f64,
            Number::Double(v) => v,
        }
    }

    /// Convert to another width without losing information
    ///
    /// Returns `None` when the value does not fit the target exactly
    /// (overflow, a fractional part, or float rounding).
    pub fn convert(&self, target: NumberKind) -> Option<Number> {
        if self.kind() == target {
            return Some(*self);
        }
        match self.as_i64() {
            Some(i) => Self::from_integral(i, target),
            None => Self::from_floating(self.as_f64(), target),
        }
    }

    fn from_integral(i: i64, target: NumberKind) -> Option<Number> {
        match target {
            NumberKind::Byte => i8::try_from(i).ok().map(Number::Byte),
            NumberKind::Short => i16::try_from(i).ok().map(Number::Short),
            NumberKind::Int => i32::try_from(i).ok().map(Number::Int),
            NumberKind::Long => Some(Number::Long(i)),
            NumberKind::Float => {
                let f = i as f32;
                (f as i64 == i && f.is_finite()).then_some(Number::Float(f))
            }
            NumberKind::Double => {
                let f = i as f64;
                (f as i64 == i).then_some(Number::Double(f))
            }
        }
    }

    fn from_floating(f: f64, target: NumberKind) -> Option<Number> {
        match target {
            NumberKind::Float => {
                let narrowed = f as f32;
                (narrowed as f64 == f || f.is_nan()).then_some(Number::Float(narrowed))
            }
            NumberKind::Double => Some(Number::Double(f)),
            integral => {
                if !f.is_finite() || f.fract() != 0.0 || f.abs() >= 9.2e18 {
                    return None;
                }
                Self::from_integral(f as i64, integral)
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Byte(v) => write!(f, "{}", v),
            Number::Short(v) => write!(f, "{}", v),
            Number::Int(v) => write!(f, "{}", v),
            Number::Long(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{:?}", v),
            Number::Double(v) => write!(f, "{:?}", v),
        }
    }
}

macro_rules! number_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Number::$variant(v)
                }
            }
        )*
    };
}

number_from!(i8 => Byte, i16 => Short, i32 => Int, i64 => Long, f32 => Float, f64 => Double);
