use std::error::Error;
use std::fmt;
use std::io;

/// Errors raised by report assembly and rendering.
#[derive(Debug)]
pub enum ReportError {
    /// An item was added without a key to a section that requires keys.
    MissingKey,
    /// A removal targeted a key that is not present.
    KeyNotFound(String),
    /// Render was attempted while the named placeholder was still unfilled.
    UnresolvedPlaceholder(String),
    /// Malformed input to a helper constructor (e.g. mismatched lengths).
    InvalidArgument(String),
    /// I/O failure while writing a report, propagated unmodified.
    Io(io::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportError::MissingKey => {
                write!(f, "a key is required to add items to this section")
            }
            ReportError::KeyNotFound(key) => write!(f, "no item with key `{}`", key),
            ReportError::UnresolvedPlaceholder(key) => {
                write!(f, "placeholder `{}` was not assigned a value", key)
            }
            ReportError::InvalidArgument(msg) => write!(f, "{}", msg),
            ReportError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReportError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(err: io::Error) -> Self {
        ReportError::Io(err)
    }
}
