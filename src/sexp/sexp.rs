//! Module for representing S-exps.

use std::fmt;
use std::str::FromStr;

use super::cons::Cons;
use crate::primitive::{Boolean, Number, SfsString, Symbol};
use crate::reader::{self, ReadError};


/// S-exp on the heap.
pub type HeapSexp = Box<Sexp>;

/// Every datum the reader produces or the interpreter returns.
///
/// Values are trees: each Cons owns its halves, and nothing but the
/// canonical Booleans is shared.
#[derive(Clone, Debug, PartialEq)]
pub enum Sexp {
    Nil,
    Boolean(&'static Boolean),
    Number(Number),
    Character(char),
    String(SfsString),
    Symbol(Symbol),
    Cons(Cons),
}

pub struct SexpIter<'a> {
    current: Option<&'a Sexp>,
}

impl Sexp {
    pub fn is_nil(&self) -> bool {
        matches!(self, Sexp::Nil)
    }

    pub fn iter(&self) -> SexpIter<'_> {
        SexpIter {
            current: Some(self),
        }
    }

    fn write_char(c: char, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match c {
            ' ' => write!(f, "#\\space"),
            '\n' => write!(f, "#\\newline"),
            _ => write!(f, "#\\{}", c),
        }
    }

    fn write_list(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (val, from_cons)) in self.iter().enumerate() {
            if i > 0 {
                if from_cons {
                    write!(f, " ")?;
                } else {
                    write!(f, " . ")?;
                }
            }
            if f.alternate() {
                write!(f, "{:#}", val)?;
            } else {
                write!(f, "{}", val)?;
            }
        }
        write!(f, ")")
    }
}


impl<'a> Iterator for SexpIter<'a> {
    // (Sexp, from_cons).
    //
    // from_cons is false only for the final, non-Nil tail of an improper
    // list, or for a top-level atom. Nil yields nothing.
    type Item = (&'a Sexp, bool);

    fn next(&mut self) -> Option<Self::Item> {
        match self.current? {
            Sexp::Cons(cons) => {
                self.current = Some(cons.cdr());
                Some((cons.car(), true))
            }
            Sexp::Nil => {
                self.current = None;
                None
            }
            sexp => {
                self.current = None;
                Some((sexp, false))
            }
        }
    }
}

impl<'a> IntoIterator for &'a Sexp {
    // (Sexp, from_cons). See impl Iterator block above for more info.
    type Item = (&'a Sexp, bool);
    type IntoIter = SexpIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for Sexp {
    fn default() -> Self {
        Sexp::Nil
    }
}

/// {} writes the external form, which reads back as an equal Sexp.
/// {:#} writes the display form: Strings and Characters as raw contents.
impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexp::Nil => write!(f, "()"),
            Sexp::Boolean(b) => write!(f, "{}", b),
            Sexp::Number(num) => write!(f, "{}", num),
            Sexp::Character(c) => {
                if f.alternate() {
                    write!(f, "{}", c)
                } else {
                    Self::write_char(*c, f)
                }
            }
            Sexp::String(s) => {
                if f.alternate() {
                    write!(f, "{}", s.as_str())
                } else {
                    write!(f, "{}", s)
                }
            }
            Sexp::Symbol(s) => write!(f, "{}", s),
            Sexp::Cons(_) => self.write_list(f),
        }
    }
}

impl FromStr for Sexp {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        reader::parse(s)
    }
}


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
