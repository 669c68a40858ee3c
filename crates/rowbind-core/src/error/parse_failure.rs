use super::{BoxError, Error};

/// Error when a string-derived parser rejects its input.
///
/// The message carries the operation name and the offending input ahead of
/// the underlying parser error, e.g. `ParseInt: parsing "x1": invalid digit`.
#[derive(Debug)]
pub(super) struct ParseFailureError {
    op: &'static str,
    input: Box<str>,
    source: BoxError,
}

impl ParseFailureError {
    pub(super) fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl core::fmt::Display for ParseFailureError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}: parsing {:?}: {}", self.op, self.input, self.source)
    }
}

impl Error {
    /// Creates a parse failure for operation `op` over `input`.
    pub fn parse_failure(op: &'static str, input: &str, source: impl Into<BoxError>) -> Error {
        Error::from(super::ErrorKind::ParseFailure(ParseFailureError {
            op,
            input: input.into(),
            source: source.into(),
        }))
    }

    /// Returns `true` if this error is a parse failure.
    pub fn is_parse_failure(&self) -> bool {
        self.any_kind(&|kind| matches!(kind, super::ErrorKind::ParseFailure(_)))
    }
}
