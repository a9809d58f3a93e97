//! Canonical true/false.

use lazy_static::lazy_static;

use std::fmt;
use std::ptr;


/// Exactly two instances exist, created at most once and never mutated.
///
/// There is no public constructor and no Clone. Values refer to the
/// singletons through &'static Boolean, so truth is an identity check.
#[derive(Debug, Eq, PartialEq)]
pub struct Boolean(bool);

lazy_static! {
    static ref TRUE: Boolean = Boolean(true);
    static ref FALSE: Boolean = Boolean(false);
}

impl Boolean {
    pub fn canonical(value: bool) -> &'static Boolean {
        if value {
            &TRUE
        } else {
            &FALSE
        }
    }

    pub fn is_true(&self) -> bool {
        ptr::eq(self, Self::canonical(true))
    }

    pub fn is_false(&self) -> bool {
        ptr::eq(self, Self::canonical(false))
    }

    pub fn value(&self) -> bool {
        self.0
    }
}

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "#t" } else { "#f" })
    }
}
