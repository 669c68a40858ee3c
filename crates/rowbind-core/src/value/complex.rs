use super::Value;
use crate::{Error, Result};

use num_complex::{Complex, Complex32, Complex64};

impl From<Complex64> for Value {
    fn from(value: Complex64) -> Self {
        Self::Complex(value)
    }
}

impl From<Complex32> for Value {
    fn from(value: Complex32) -> Self {
        Self::Complex(Complex::new(value.re.into(), value.im.into()))
    }
}

impl TryFrom<Value> for Complex64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Complex(v) => Ok(v),
            value => Err(Error::type_incompatible(value.describe(), "Complex<f64>")),
        }
    }
}

impl TryFrom<Value> for Complex32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Complex(v) => {
                let narrowed = Complex::new(v.re as f32, v.im as f32);
                if (narrowed.re.is_infinite() && v.re.is_finite())
                    || (narrowed.im.is_infinite() && v.im.is_finite())
                {
                    Err(Error::overflow(&value, "Complex<f32>"))
                } else {
                    Ok(narrowed)
                }
            }
            value => Err(Error::type_incompatible(value.describe(), "Complex<f32>")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_complex() {
        let value = Value::Complex(Complex::new(1.5, -2.0));
        assert_eq!(
            Complex32::try_from(value).unwrap(),
            Complex::new(1.5f32, -2.0f32)
        );
    }

    #[test]
    fn narrow_complex_overflow() {
        let value = Value::Complex(Complex::new(1.0, 1e300));
        assert!(Complex32::try_from(value)
            .unwrap_err()
            .is_type_incompatible());
    }
}
