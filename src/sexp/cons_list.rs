//! Module for constructing lists as S-exps front to back.

use super::sexp::{HeapSexp, Sexp};
use super::Cons;


#[derive(Debug, Default)]
pub struct ConsList {
    elems: Vec<Sexp>,
}

impl ConsList {
    pub fn new() -> ConsList {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn append<T: Into<Sexp>>(&mut self, val: T) {
        self.elems.push(val.into());
    }

    /// Proper list of the appended elements; Nil if none were appended.
    pub fn release(self) -> Sexp {
        self.release_with_tail(Sexp::Nil)
    }

    pub fn release_with_tail(self, tail: Sexp) -> Sexp {
        self.elems.into_iter().rev().fold(tail, |cdr, car| {
            Cons::new(HeapSexp::new(car), HeapSexp::new(cdr)).into()
        })
    }
}
