use super::{BoxError, Error};

/// Error reported by a row cursor.
#[derive(Debug)]
pub(super) struct DriverError {
    cursor: BoxError,
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.cursor)
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let first: &(dyn std::error::Error + 'static) = &*self.cursor;
        let chain = std::iter::successors(Some(first), |err| err.source());

        for (i, err) in chain.enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            core::fmt::Display::fmt(err, f)?;
        }
        Ok(())
    }
}

impl Error {
    /// Wraps a row cursor's own error type.
    ///
    /// Cursor implementations use this for failures in `next`, `scan`, `err`
    /// and `close`. The cursor error's sources are shown after it.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError {
            cursor: Box::new(err),
        }))
    }

    /// Returns `true` if this error was reported by a row cursor.
    pub fn is_driver(&self) -> bool {
        self.any_kind(&|kind| matches!(kind, super::ErrorKind::Driver(_)))
    }
}
