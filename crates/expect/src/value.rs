//! Scalar values accepted by the comparator and the adapter that produces them.
//!
//! A [`Value`] keeps the caller's original representation. Classification
//! ([`Value::category`]) and widening ([`Value::canonical`]) are total over
//! the variants, so the only way to hit `UnsupportedType` is through an
//! adapter that wraps dynamically-typed data, such as `serde_json::Value`.

use std::borrow::Cow;

use crate::ExpectError;

// ──────────────────────────────────────────────
// Values
// ──────────────────────────────────────────────

/// A scalar in its native storage, borrowed from the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Bool(bool),
    Str(&'a str),
}

/// The comparison class of a [`Value`]. Decides which rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Signed,
    Unsigned,
    Real,
    Boolean,
    Text,
}

impl Category {
    /// Signed, Unsigned and Real values take part in ordering comparisons.
    pub fn is_numeric(self) -> bool {
        matches!(self, Category::Signed | Category::Unsigned | Category::Real)
    }
}

/// A value widened to the canonical width of its category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Canonical<'a> {
    Signed(i64),
    Unsigned(u64),
    Real(f64),
    Boolean(bool),
    Text(&'a str),
}

impl<'a> Value<'a> {
    pub fn category(&self) -> Category {
        match self {
            Value::I8(_) | Value::I16(_) | Value::I32(_) | Value::I64(_) | Value::Isize(_) => {
                Category::Signed
            }
            Value::U8(_) | Value::U16(_) | Value::U32(_) | Value::U64(_) | Value::Usize(_) => {
                Category::Unsigned
            }
            Value::F32(_) | Value::F64(_) => Category::Real,
            Value::Bool(_) => Category::Boolean,
            Value::Str(_) => Category::Text,
        }
    }

    /// Widen to the category's canonical form. Lossless for every variant:
    /// `isize` and `usize` are at most 64 bits wide on supported targets.
    pub fn canonical(&self) -> Canonical<'a> {
        match *self {
            Value::I8(v) => Canonical::Signed(v.into()),
            Value::I16(v) => Canonical::Signed(v.into()),
            Value::I32(v) => Canonical::Signed(v.into()),
            Value::I64(v) => Canonical::Signed(v),
            Value::Isize(v) => Canonical::Signed(v as i64),
            Value::U8(v) => Canonical::Unsigned(v.into()),
            Value::U16(v) => Canonical::Unsigned(v.into()),
            Value::U32(v) => Canonical::Unsigned(v.into()),
            Value::U64(v) => Canonical::Unsigned(v),
            Value::Usize(v) => Canonical::Unsigned(v as u64),
            Value::F32(v) => Canonical::Real(v.into()),
            Value::F64(v) => Canonical::Real(v),
            Value::Bool(v) => Canonical::Boolean(v),
            Value::Str(v) => Canonical::Text(v),
        }
    }

    /// Returns the Rust type name of the underlying representation, for
    /// error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::Isize(_) => "isize",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::Usize(_) => "usize",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
        }
    }
}

impl Canonical<'_> {
    /// Restate a numeric canonical value as `f64`. Integers beyond 2^53 lose
    /// precision. Returns `None` for Boolean and Text.
    pub fn to_f64(self) -> Option<f64> {
        match self {
            Canonical::Signed(v) => Some(v as f64),
            Canonical::Unsigned(v) => Some(v as f64),
            Canonical::Real(v) => Some(v),
            Canonical::Boolean(_) | Canonical::Text(_) => None,
        }
    }
}

// ──────────────────────────────────────────────
// Adapter
// ──────────────────────────────────────────────

/// Converts a caller's value into a [`Value`] the comparator understands.
///
/// Statically-typed scalars always succeed. Implementations for dynamic data
/// return [`ExpectError::UnsupportedType`] for anything that is not a scalar.
pub trait ToValue {
    fn to_value(&self) -> Result<Value<'_>, ExpectError>;
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Result<Value<'_>, ExpectError> {
                    Ok(Value::$variant(*self))
                }
            }

            impl From<$ty> for Value<'static> {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_scalar! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    bool => Bool,
}

impl ToValue for str {
    fn to_value(&self) -> Result<Value<'_>, ExpectError> {
        Ok(Value::Str(self))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Result<Value<'_>, ExpectError> {
        Ok(Value::Str(self.as_str()))
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Result<Value<'_>, ExpectError> {
        Ok(Value::Str(self.as_ref()))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::Str(v)
    }
}

impl ToValue for Value<'_> {
    fn to_value(&self) -> Result<Value<'_>, ExpectError> {
        Ok(*self)
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Result<Value<'_>, ExpectError> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Result<Value<'_>, ExpectError> {
        (**self).to_value()
    }
}

/// JSON numbers classify as the narrowest category that holds them exactly:
/// Unsigned, then Signed, then Real. `null`, arrays and objects are rejected.
#[cfg(feature = "json")]
impl ToValue for serde_json::Value {
    fn to_value(&self) -> Result<Value<'_>, ExpectError> {
        match self {
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            serde_json::Value::String(s) => Ok(Value::Str(s)),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Ok(Value::U64(u))
                } else if let Some(i) = n.as_i64() {
                    Ok(Value::I64(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::F64(f))
                } else {
                    Err(ExpectError::unsupported(format!("json number {}", n)))
                }
            }
            serde_json::Value::Null => Err(ExpectError::unsupported("json null")),
            serde_json::Value::Array(_) => Err(ExpectError::unsupported("json array")),
            serde_json::Value::Object(_) => Err(ExpectError::unsupported("json object")),
        }
    }
}
