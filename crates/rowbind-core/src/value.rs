mod cmp;
mod complex;
mod num;
mod time;
mod ty;

pub use ty::Type;

use crate::{Error, Result};

use chrono::{DateTime, FixedOffset};
use num_complex::Complex64;

/// A column value as produced by a row cursor or by a converter step.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 64-bit floating point number
    F64(f64),

    /// Complex number with 64-bit parts
    Complex(Complex64),

    /// String value
    String(String),

    /// Raw byte buffer
    Bytes(Vec<u8>),

    /// Instant with a fixed UTC offset
    Timestamp(DateTime<FixedOffset>),

    /// A list of values of the same type
    List(Vec<Value>),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(v) => Some(&v[..]),
            Self::String(v) => Some(v.as_bytes()),
            _ => None,
        }
    }

    /// Returns the value's type, or `None` for `Null`.
    ///
    /// An empty list reports a list of strings; use [`Value::is_a`] to check a
    /// list against an expected item type.
    pub fn ty(&self) -> Option<Type> {
        Some(match self {
            Self::Null => return None,
            Self::Bool(_) => Type::Bool,
            Self::I64(_) => Type::I64,
            Self::U64(_) => Type::U64,
            Self::F64(_) => Type::F64,
            Self::Complex(_) => Type::Complex,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::Timestamp(_) => Type::Timestamp,
            Self::List(items) => Type::list(
                items
                    .first()
                    .and_then(Value::ty)
                    .unwrap_or(Type::String),
            ),
        })
    }

    /// Returns `true` if the value is already of type `ty`.
    ///
    /// `Null` is a member of every type.
    pub fn is_a(&self, ty: &Type) -> bool {
        match (self, ty) {
            (Self::Null, _) => true,
            (Self::Bool(_), Type::Bool) => true,
            (Self::I64(_), Type::I64) => true,
            (Self::U64(_), Type::U64) => true,
            (Self::F64(_), Type::F64) => true,
            (Self::Complex(_), Type::Complex) => true,
            (Self::String(_), Type::String) => true,
            (Self::Bytes(_), Type::Bytes) => true,
            (Self::Timestamp(_), Type::Timestamp) => true,
            (Self::List(items), Type::List(item)) => items.iter().all(|v| v.is_a(item)),
            _ => false,
        }
    }

    /// Converts the value to type `ty`.
    ///
    /// Numeric values move between the signed, unsigned and floating point
    /// representations only when no information is lost. Strings and byte
    /// buffers convert into each other, the latter only when they hold valid
    /// UTF-8. Lists convert item by item.
    pub fn coerce(self, ty: &Type) -> Result<Value> {
        if self.is_a(ty) {
            return Ok(self);
        }

        match ty {
            Type::Bool => bool::try_from(self).map(Value::Bool),
            Type::I64 => i64::try_from(self).map(Value::I64),
            Type::U64 => u64::try_from(self).map(Value::U64),
            Type::F64 => f64::try_from(self).map(Value::F64),
            Type::Complex => Complex64::try_from(self).map(Value::Complex),
            Type::String => String::try_from(self).map(Value::String),
            Type::Timestamp => DateTime::<FixedOffset>::try_from(self).map(Value::Timestamp),
            Type::Bytes => match self {
                Self::String(v) => Ok(Self::Bytes(v.into_bytes())),
                value => Err(Error::type_incompatible(value.describe(), ty)),
            },
            Type::List(item) => match self {
                Self::List(items) => items
                    .into_iter()
                    .map(|v| v.coerce(item))
                    .collect::<Result<Vec<_>>>()
                    .map(Self::List),
                Self::Bytes(bytes) => bytes
                    .into_iter()
                    .map(|b| Value::U64(b.into()).coerce(item))
                    .collect::<Result<Vec<_>>>()
                    .map(Self::List),
                value => Err(Error::type_incompatible(value.describe(), ty)),
            },
        }
    }

    /// Describes the value's type for error messages.
    pub(crate) fn describe(&self) -> String {
        match self.ty() {
            Some(ty) => ty.to_string(),
            None => "null".to_string(),
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::U64(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
            Self::Complex(v) => write!(f, "({})", v),
            Self::String(v) => write!(f, "{:?}", v),
            Self::Bytes(v) => write!(f, "{:?}", v),
            Self::Timestamp(v) => f.write_str(&v.to_rfc3339()),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    core::fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            value => Err(Error::type_incompatible(value.describe(), "bool")),
        }
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Bytes(v) => String::from_utf8(v).map_err(|err| {
                Error::type_incompatible_because("bytes", "String", err.to_string())
            }),
            value => Err(Error::type_incompatible(value.describe(), "String")),
        }
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<&[u8]> for Value {
    fn from(src: &[u8]) -> Self {
        Self::Bytes(src.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
