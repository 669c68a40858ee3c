mod adhoc;
mod close_failure;
mod decode_failure;
mod driver;
mod enum_lookup;
mod field_not_exported;
mod field_not_found;
mod no_rows;
mod parse_failure;
mod too_many_rows;
mod type_incompatible;

use adhoc::AdhocError;
use close_failure::CloseFailureError;
use decode_failure::DecodeFailureError;
use driver::DriverError;
use enum_lookup::EnumLookupError;
use field_not_exported::FieldNotExportedError;
use field_not_found::FieldNotFoundError;
use no_rows::NoRowsError;
use parse_failure::ParseFailureError;
use std::fmt;
use std::sync::Arc;
use too_many_rows::TooManyRowsError;
use type_incompatible::TypeIncompatibleError;

/// Boxed error produced by parsers, decoders and row cursors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while binding rows to records.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Wraps this error with an outer message.
    ///
    /// The outer message is printed first, separated from this error by `": "`.
    #[inline(always)]
    pub fn context(self, outer: impl IntoError) -> Error {
        self.context_impl(outer.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, outer: Error) -> Error {
        let kind = match outer.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) if inner.cause.is_none() => inner.kind,
                Ok(inner) => ErrorKind::Adhoc(AdhocError::new(Error::from(inner).to_string())),
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(Error::from(shared).to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    /// Creates an ad-hoc error from preformatted arguments.
    pub fn from_args(args: fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(args)))
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn cause(&self) -> Option<&Error> {
        self.inner.as_ref()?.cause.as_ref()
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |err| err.cause())
    }

    fn kind(&self) -> &ErrorKind {
        match &self.inner {
            Some(inner) => &inner.kind,
            None => &ErrorKind::Unknown,
        }
    }

    /// Returns `true` if any error in the context chain matches `f`.
    ///
    /// A close failure also forwards the check to the primary error it carries.
    fn any_kind(&self, f: &dyn Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| match err.kind() {
            ErrorKind::CloseFailure(close) => {
                f(err.kind()) || close.primary().is_some_and(|primary| primary.any_kind(f))
            }
            kind => f(kind),
        })
    }
}

impl From<ErrorInner> for Error {
    fn from(inner: ErrorInner) -> Error {
        Error {
            inner: Some(Arc::new(inner)),
        }
    }
}

impl From<Arc<ErrorInner>> for Error {
    fn from(inner: Arc<ErrorInner>) -> Error {
        Error { inner: Some(inner) }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Adhoc(err) => err.source(),
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::ParseFailure(err) => err.source(),
            ErrorKind::DecodeFailure(err) => err.source(),
            ErrorKind::CloseFailure(err) => Some(err.close()),
            _ => self
                .cause()
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.chain().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            write!(f, "{}", err.kind())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return fmt::Display::fmt(self, f);
        }

        let mut list = f.debug_list();
        for err in self.chain() {
            list.entry(err.kind());
        }
        list.finish()
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Driver(DriverError),
    FieldNotFound(FieldNotFoundError),
    FieldNotExported(FieldNotExportedError),
    TypeIncompatible(TypeIncompatibleError),
    ParseFailure(ParseFailureError),
    DecodeFailure(DecodeFailureError),
    EnumLookup(EnumLookupError),
    NoRows(NoRowsError),
    TooManyRows(TooManyRowsError),
    CloseFailure(CloseFailureError),
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner: &dyn fmt::Display = match self {
            ErrorKind::Adhoc(err) => err,
            ErrorKind::Driver(err) => err,
            ErrorKind::FieldNotFound(err) => err,
            ErrorKind::FieldNotExported(err) => err,
            ErrorKind::TypeIncompatible(err) => err,
            ErrorKind::ParseFailure(err) => err,
            ErrorKind::DecodeFailure(err) => err,
            ErrorKind::EnumLookup(err) => err,
            ErrorKind::NoRows(err) => err,
            ErrorKind::TooManyRows(err) => err,
            ErrorKind::CloseFailure(err) => err,
            ErrorKind::Unknown => return f.write_str("unknown rowbind error"),
        };
        fmt::Display::fmt(inner, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::from(ErrorInner { kind, cause: None })
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_anyhow(err)))
    }
}

/// Values accepted by [`Error::context`].
pub trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}
