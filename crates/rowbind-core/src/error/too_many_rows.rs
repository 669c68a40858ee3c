use super::Error;

/// Error when an operation expects exactly one row but the cursor has more.
#[derive(Debug)]
pub(super) struct TooManyRowsError;

impl std::error::Error for TooManyRowsError {}

impl core::fmt::Display for TooManyRowsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("too many rows")
    }
}

impl Error {
    /// Creates a too-many-rows error.
    pub fn too_many_rows() -> Error {
        Error::from(super::ErrorKind::TooManyRows(TooManyRowsError))
    }

    /// Returns `true` if this error is a too-many-rows error.
    pub fn is_too_many_rows(&self) -> bool {
        self.any_kind(&|kind| matches!(kind, super::ErrorKind::TooManyRows(_)))
    }
}
