use super::Error;

/// Error when a field path names a member that is not public.
#[derive(Debug)]
pub(super) struct FieldNotExportedError {
    path: Box<str>,
    segment: Box<str>,
    owner: &'static str,
}

impl std::error::Error for FieldNotExportedError {}

impl core::fmt::Display for FieldNotExportedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "path `{}`: field `{}` on {} is not exported",
            self.path, self.segment, self.owner
        )
    }
}

impl Error {
    /// Creates a field-not-exported error.
    pub fn field_not_exported(path: &str, segment: &str, owner: &'static str) -> Error {
        Error::from(super::ErrorKind::FieldNotExported(FieldNotExportedError {
            path: path.into(),
            segment: segment.into(),
            owner,
        }))
    }

    /// Returns `true` if this error is a field-not-exported error.
    pub fn is_field_not_exported(&self) -> bool {
        self.any_kind(&|kind| matches!(kind, super::ErrorKind::FieldNotExported(_)))
    }
}
