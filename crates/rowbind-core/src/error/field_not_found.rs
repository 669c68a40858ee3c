use super::Error;

/// Error when a field path names a member that does not exist.
///
/// This occurs when:
/// - A path segment does not name a field of the record
/// - A non-terminal segment addresses a type that has no fields
#[derive(Debug)]
pub(super) struct FieldNotFoundError {
    path: Box<str>,
    segment: Box<str>,
    owner: &'static str,
}

impl std::error::Error for FieldNotFoundError {}

impl core::fmt::Display for FieldNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "path `{}`: field `{}` not found on {}",
            self.path, self.segment, self.owner
        )
    }
}

impl Error {
    /// Creates a field-not-found error.
    ///
    /// `owner` is the name of the type the segment was looked up on.
    pub fn field_not_found(path: &str, segment: &str, owner: &'static str) -> Error {
        Error::from(super::ErrorKind::FieldNotFound(FieldNotFoundError {
            path: path.into(),
            segment: segment.into(),
            owner,
        }))
    }

    /// Returns `true` if this error is a field-not-found error.
    pub fn is_field_not_found(&self) -> bool {
        self.any_kind(&|kind| matches!(kind, super::ErrorKind::FieldNotFound(_)))
    }
}
