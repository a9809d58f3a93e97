//! Representation of errors which can be reified as S-exps.
//!
//! Each stage (extraction, reading, evaluation) has its own typed error.
//! Every one of them implements ErrorKind, which lets a Session hand them
//! out uniformly as an Error and lets callers inspect them as plain data.

use std::fmt;

use crate::sexp::Sexp;


pub struct Error {
    kind: Box<dyn ErrorKind>,
}

pub trait ErrorKind: fmt::Debug + fmt::Display {
    /// Represent the error as data, as ("<Stage>Error" "<Reason>" details...).
    fn reify(&self) -> Sexp;
}


impl Error {
    pub fn new(kind: Box<dyn ErrorKind>) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &dyn ErrorKind {
        &*self.kind
    }
}

impl PartialEq for Error {
    /// Compare kind.
    fn eq(&self, other: &Self) -> bool {
        self.kind().reify() == other.kind().reify()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind(), self.kind().reify())
    }
}


impl std::error::Error for Error {}
