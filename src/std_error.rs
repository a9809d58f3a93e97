use std::fmt;

use crate::error::{Error, ErrorKind};
use crate::primitive::SfsString;
use crate::sexp::Sexp;


/// Encapsulation of Errors in rust's std module.
#[derive(Debug)]
pub enum StdError {
    Io(std::io::Error),
}

impl ErrorKind for StdError {
    fn reify(&self) -> Sexp {
        match self {
            Self::Io(err) => list!(
                SfsString::unbounded("StdError"),
                SfsString::unbounded("IoError"),
                SfsString::unbounded(err.to_string()),
            ),
        }
    }
}

impl fmt::Display for StdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "[Io Error] {}", err),
        }
    }
}

/// Allow for io::Errors to be used seamlessly with sfs::Errors.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(Box::new(StdError::Io(err)))
    }
}
