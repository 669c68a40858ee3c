use super::{BoxError, Error};

/// Error when a text, binary or JSON decoder rejects its input.
#[derive(Debug)]
pub(super) struct DecodeFailureError {
    format: &'static str,
    source: BoxError,
}

impl DecodeFailureError {
    pub(super) fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl core::fmt::Display for DecodeFailureError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} decode failed: {}", self.format, self.source)
    }
}

impl Error {
    /// Creates a decode failure for the named format.
    pub fn decode_failure(format: &'static str, source: impl Into<BoxError>) -> Error {
        Error::from(super::ErrorKind::DecodeFailure(DecodeFailureError {
            format,
            source: source.into(),
        }))
    }

    /// Returns `true` if this error is a decode failure.
    pub fn is_decode_failure(&self) -> bool {
        self.any_kind(&|kind| matches!(kind, super::ErrorKind::DecodeFailure(_)))
    }
}
