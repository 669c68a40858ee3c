use super::Error;

/// Error when a single-row read finds an empty result set.
#[derive(Debug)]
pub(super) struct NoRowsError;

impl std::error::Error for NoRowsError {}

impl core::fmt::Display for NoRowsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no rows in result set")
    }
}

impl Error {
    /// Creates a no-rows error.
    pub fn no_rows() -> Error {
        Error::from(super::ErrorKind::NoRows(NoRowsError))
    }

    /// Returns `true` if this error is a no-rows error.
    pub fn is_no_rows(&self) -> bool {
        self.any_kind(&|kind| matches!(kind, super::ErrorKind::NoRows(_)))
    }
}
