use super::Error;

/// Error when releasing a row cursor fails.
///
/// The failure is combined with the primary error of the read, if there was one,
/// so neither is dropped.
#[derive(Debug)]
pub(super) struct CloseFailureError {
    close: Error,
    primary: Option<Error>,
}

impl CloseFailureError {
    pub(super) fn close(&self) -> &Error {
        &self.close
    }

    pub(super) fn primary(&self) -> Option<&Error> {
        self.primary.as_ref()
    }
}

impl core::fmt::Display for CloseFailureError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.primary {
            Some(ref primary) => write!(
                f,
                "{}; closing rows also failed: {}",
                primary, self.close
            ),
            None => write!(f, "failed to close rows: {}", self.close),
        }
    }
}

impl Error {
    /// Creates a close failure, keeping the read's primary error if any.
    pub fn close_failure(close: Error, primary: Option<Error>) -> Error {
        Error::from(super::ErrorKind::CloseFailure(CloseFailureError {
            close,
            primary,
        }))
    }

    /// Returns `true` if this error carries a close failure.
    pub fn is_close_failure(&self) -> bool {
        self.any_kind(&|kind| matches!(kind, super::ErrorKind::CloseFailure(_)))
    }
}
