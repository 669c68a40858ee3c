use super::{Conversion, Convert, Converter, Target};
use crate::Result;

/// Marks the wrapped converter's input as possibly absent.
///
/// An absent value skips the wrapped converter. Committed to an `Option`
/// field it clears the field; any other field keeps its current value.
#[derive(Clone)]
pub struct Nullable {
    inner: Converter,
}

impl Nullable {
    pub fn new(inner: Converter) -> Nullable {
        Nullable { inner }
    }
}

impl Convert for Nullable {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        Ok(self.inner.bind(dest)?.with_nullable(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::Identity;
    use crate::shape::shape_of;
    use crate::Value;

    use std::sync::Arc;

    #[test]
    fn nullable_passes_null_through() {
        let conversion = Nullable::new(Arc::new(Identity))
            .bind(&Target::field(shape_of::<Option<i64>>()))
            .unwrap();
        assert!(conversion.is_nullable());
        assert!(!conversion.handles_null());
        assert_eq!(conversion.run(Value::Null).unwrap(), Value::Null);
    }
}
