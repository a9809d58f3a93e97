use std::convert::TryFrom;
use std::fmt;
use std::mem;

use super::sexp::{HeapSexp, Sexp};


/// Pair cell. Exclusively owns both halves.
///
/// Clone, PartialEq, Debug and Drop all walk the cdr chain in a loop, so
/// list length never costs stack depth; only car nesting recurses.
pub struct Cons {
    car: HeapSexp,
    cdr: HeapSexp,
}

impl Cons {
    pub fn new(car: HeapSexp, cdr: HeapSexp) -> Cons {
        Cons { car, cdr }
    }

    pub fn car(&self) -> &Sexp {
        self.car.as_ref()
    }

    pub fn cdr(&self) -> &Sexp {
        self.cdr.as_ref()
    }
}

impl Clone for Cons {
    fn clone(&self) -> Self {
        let mut cars = Vec::new();
        let mut tail = self.cdr();
        while let Sexp::Cons(cons) = tail {
            cars.push(cons.car.clone());
            tail = cons.cdr();
        }

        let cdr = cars
            .into_iter()
            .rev()
            .fold(HeapSexp::new(tail.clone()), |cdr, car| {
                HeapSexp::new(Sexp::Cons(Cons::new(car, cdr)))
            });
        Cons::new(self.car.clone(), cdr)
    }
}

impl PartialEq for Cons {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            if a.car != b.car {
                return false;
            }
            match (a.cdr(), b.cdr()) {
                (Sexp::Cons(x), Sexp::Cons(y)) => {
                    a = x;
                    b = y;
                }
                (x, y) => return x == y,
            }
        }
    }
}

impl fmt::Debug for Cons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cons({:?}", self.car())?;
        let mut tail = self.cdr();
        while let Sexp::Cons(cons) = tail {
            write!(f, " {:?}", cons.car())?;
            tail = cons.cdr();
        }
        if !tail.is_nil() {
            write!(f, " . {:?}", tail)?;
        }
        write!(f, ")")
    }
}

/// Unlinks the cdr chain iteratively so long lists don't exhaust the stack.
impl Drop for Cons {
    fn drop(&mut self) {
        let mut next = mem::take(&mut *self.cdr);
        while let Sexp::Cons(mut cons) = next {
            next = mem::take(&mut *cons.cdr);
        }
    }
}


impl<'a> TryFrom<&'a Sexp> for &'a Cons {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}
