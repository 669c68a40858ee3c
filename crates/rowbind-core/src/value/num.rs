use super::Value;
use crate::{Error, Result};

// Integer conversions accept any numeric variant and fail instead of wrapping
// or truncating. Floats convert to integers only when they are integral.
// Narrowing f64 to f32 rounds to the nearest f32 and fails only on overflow.

macro_rules! impl_int {
    (
        $(
            $variant:ident($ty:ident)
        )*
    ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value as _)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value as _)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    match value {
                        Value::I64(v) => {
                            $ty::try_from(v).map_err(|_| Error::overflow(&value, stringify!($ty)))
                        }
                        Value::U64(v) => {
                            $ty::try_from(v).map_err(|_| Error::overflow(&value, stringify!($ty)))
                        }
                        Value::F64(v) => match integral(v) {
                            Some(n) => $ty::try_from(n)
                                .map_err(|_| Error::overflow(&value, stringify!($ty))),
                            None => Err(Error::lossy(&value, stringify!($ty))),
                        },
                        value => Err(Error::type_incompatible(value.describe(), stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_int! {
    I64(i8)
    I64(i16)
    I64(i32)
    I64(i64)
    I64(isize)
    U64(u8)
    U64(u16)
    U64(u32)
    U64(u64)
    U64(usize)
}

/// Returns the integer a float holds, if it holds one exactly.
fn integral(v: f64) -> Option<i128> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e38 {
        Some(v as i128)
    } else {
        None
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::F64(value.into())
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I64(v) => exact(&value, v as f64, v.into(), |f: f64| f as i128, "f64"),
            Value::U64(v) => exact(&value, v as f64, v.into(), |f: f64| f as i128, "f64"),
            value => Err(Error::type_incompatible(value.describe(), "f64")),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => {
                let narrowed = v as f32;
                if narrowed.is_infinite() && v.is_finite() {
                    Err(Error::overflow(&value, "f32"))
                } else {
                    Ok(narrowed)
                }
            }
            Value::I64(v) => exact(&value, v as f32, v.into(), |f: f32| f as i128, "f32"),
            Value::U64(v) => exact(&value, v as f32, v.into(), |f: f32| f as i128, "f32"),
            value => Err(Error::type_incompatible(value.describe(), "f32")),
        }
    }
}

/// Accepts an integer-to-float conversion only if it round-trips.
fn exact<F: Copy>(
    value: &Value,
    converted: F,
    original: i128,
    back: impl Fn(F) -> i128,
    to: &'static str,
) -> Result<F> {
    if back(converted) == original {
        Ok(converted)
    } else {
        Err(Error::lossy(value, to))
    }
}
