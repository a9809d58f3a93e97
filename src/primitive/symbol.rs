use std::convert::TryFrom;
use std::fmt;

use super::text_buffer::{TextBuffer, TextOverflow};
use crate::config::DEFAULT_TEXT_CAPACITY;
use crate::sexp::Sexp;


/// Case-sensitive identifier text.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(String);

pub trait ToSymbol {
    fn to_symbol(&self) -> SymbolResult;

    fn to_symbol_or_panic(&self) -> Symbol {
        self.to_symbol().unwrap()
    }
}

pub type SymbolResult = Result<Symbol, TextOverflow>;

impl Symbol {
    pub fn new<S: AsRef<str>>(sym: S) -> SymbolResult {
        Self::with_capacity(sym, DEFAULT_TEXT_CAPACITY)
    }

    pub fn with_capacity<S: AsRef<str>>(sym: S, capacity: usize) -> SymbolResult {
        let mut buffer = TextBuffer::with_capacity(capacity);
        buffer.push_str(sym)?;
        Ok(Self::from(buffer))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<TextBuffer> for Symbol {
    fn from(buffer: TextBuffer) -> Self {
        Self(buffer.into_string())
    }
}


impl<S: AsRef<str>> ToSymbol for S {
    fn to_symbol(&self) -> SymbolResult {
        Symbol::new(self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a Symbol {
    type Error = ();

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Symbol(symbol) = value {
            Ok(symbol)
        } else {
            Err(())
        }
    }
}
