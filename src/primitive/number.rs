//! Representation of SFS numbers.

use std::fmt;

use self::Number::*;


/// Only Integer is produced by the reader; Real is constructible for
/// callers that need it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer(i) => write!(f, "{}", i),
            Real(r) => write!(f, "{:?}", r),
        }
    }
}
