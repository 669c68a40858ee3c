use super::Error;
use crate::Value;

/// Error when a value or representation cannot be committed to a destination.
///
/// Raised at setup time when a converter does not line up with its destination,
/// and per value when a numeric conversion would overflow or lose precision.
#[derive(Debug)]
pub(super) struct TypeIncompatibleError {
    from: Box<str>,
    to: Box<str>,
    reason: Option<Box<str>>,
}

impl std::error::Error for TypeIncompatibleError {}

impl core::fmt::Display for TypeIncompatibleError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.from, self.to)?;
        if let Some(ref reason) = self.reason {
            write!(f, ": {}", reason)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a type-incompatible error between two described types.
    pub fn type_incompatible(from: impl core::fmt::Display, to: impl core::fmt::Display) -> Error {
        Error::from(super::ErrorKind::TypeIncompatible(TypeIncompatibleError {
            from: from.to_string().into(),
            to: to.to_string().into(),
            reason: None,
        }))
    }

    /// Creates a type-incompatible error with an explanation.
    pub fn type_incompatible_because(
        from: impl core::fmt::Display,
        to: impl core::fmt::Display,
        reason: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::TypeIncompatible(TypeIncompatibleError {
            from: from.to_string().into(),
            to: to.to_string().into(),
            reason: Some(reason.into().into()),
        }))
    }

    /// Creates an error for a value that does not fit the destination's range.
    pub fn overflow(value: &Value, to: impl core::fmt::Display) -> Error {
        Error::type_incompatible_because(value, to, "out of range")
    }

    /// Creates an error for a numeric conversion that would drop information.
    pub fn lossy(value: &Value, to: impl core::fmt::Display) -> Error {
        Error::type_incompatible_because(value, to, "lossy conversion")
    }

    /// Returns `true` if this error is a type-incompatible error.
    pub fn is_type_incompatible(&self) -> bool {
        self.any_kind(&|kind| matches!(kind, super::ErrorKind::TypeIncompatible(_)))
    }
}
