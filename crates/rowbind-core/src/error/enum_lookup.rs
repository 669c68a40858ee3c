use super::Error;
use crate::Value;

/// Error when a value is missing from an enum lookup table.
#[derive(Debug)]
pub(super) struct EnumLookupError {
    input: Value,
    valid: Vec<Value>,
}

impl std::error::Error for EnumLookupError {}

impl core::fmt::Display for EnumLookupError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "value {} is not one of [", self.input)?;
        for (i, value) in self.valid.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl Error {
    /// Creates an enum lookup failure naming the input and the accepted keys.
    pub fn enum_lookup(input: Value, valid: Vec<Value>) -> Error {
        Error::from(super::ErrorKind::EnumLookup(EnumLookupError { input, valid }))
    }

    /// Returns `true` if this error is an enum lookup failure.
    pub fn is_enum_lookup(&self) -> bool {
        self.any_kind(&|kind| matches!(kind, super::ErrorKind::EnumLookup(_)))
    }
}
