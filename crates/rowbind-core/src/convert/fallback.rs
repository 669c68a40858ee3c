use super::{Commit, Conversion, Convert, Converter, Target};
use crate::{assign, decode, Result, Value};

use std::sync::Arc;

/// Substitutes a fixed value when the input is absent.
///
/// The fallback is committed the same way converted values are, and is
/// checked against the destination when the converter is bound.
#[derive(Clone)]
pub struct Fallback {
    inner: Converter,
    value: Value,
}

impl Fallback {
    pub fn new(inner: Converter, value: impl Into<Value>) -> Fallback {
        Fallback {
            inner,
            value: value.into(),
        }
    }
}

impl Convert for Fallback {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        let conversion = self.inner.bind(dest)?;
        let fallback = check(dest, &conversion, self.value.clone())
            .map_err(|err| err.context(format!("invalid default value {}", self.value)))?;

        let inner = conversion.clone();
        Ok(conversion.with_null_handler(Arc::new(move |value| {
            if value.is_null() {
                Ok(fallback.clone())
            } else {
                inner.run(value)
            }
        })))
    }
}

/// Commits `value` to a scratch instance of the destination.
fn check(dest: &Target, conversion: &Conversion, value: Value) -> Result<Value> {
    match dest {
        Target::Value(ty) => value.coerce(ty),
        Target::Field(shape) => {
            let mut scratch = (shape.zeroed)();
            match conversion.commit() {
                Commit::Assign => assign(shape, &mut *scratch, value.clone())?,
                Commit::Decode(format) => decode(shape, &mut *scratch, format, value.clone())?,
            }
            Ok(value)
        }
    }
}
