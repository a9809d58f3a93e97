//! Conversions into Sexp and the list! constructor.

use super::cons::Cons;
use super::sexp::Sexp;
use crate::primitive::{Boolean, Number, SfsString, Symbol};


impl From<Cons> for Sexp {
    fn from(cons: Cons) -> Self {
        Sexp::Cons(cons)
    }
}

impl From<Number> for Sexp {
    fn from(number: Number) -> Self {
        Sexp::Number(number)
    }
}

impl From<i64> for Sexp {
    fn from(i: i64) -> Self {
        Sexp::Number(Number::Integer(i))
    }
}

impl From<bool> for Sexp {
    fn from(b: bool) -> Self {
        Sexp::Boolean(Boolean::canonical(b))
    }
}

impl From<&'static Boolean> for Sexp {
    fn from(b: &'static Boolean) -> Self {
        Sexp::Boolean(b)
    }
}

impl From<char> for Sexp {
    fn from(c: char) -> Self {
        Sexp::Character(c)
    }
}

impl From<SfsString> for Sexp {
    fn from(string: SfsString) -> Self {
        Sexp::String(string)
    }
}

impl From<Symbol> for Sexp {
    fn from(symbol: Symbol) -> Self {
        Sexp::Symbol(symbol)
    }
}


// Should not be used directly. Use list! below.
#[doc(hidden)]
#[macro_export]
macro_rules! list_inner {
    () => { $crate::sexp::Sexp::Nil };
    ($elem:expr $(, $tail:expr)*) => {
        <$crate::sexp::Sexp>::from($crate::sexp::Cons::new(
            $crate::sexp::HeapSexp::new($elem.into()),
            $crate::sexp::HeapSexp::new($crate::list_inner!($($tail),*)),
        ))
    };
}

/// Returns the elements as a proper Sexp list.
///
/// Elements can be anything with Into<Sexp>.
/// Example:
///   list!(Symbol::new("quote")?, 1i64) => (quote 1)
#[macro_export]
macro_rules! list {
    ($($elem:expr),* $(,)?) => {
        $crate::list_inner!($($elem),*)
    };
}
