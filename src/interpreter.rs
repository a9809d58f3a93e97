//! Tree-walking evaluation of the special forms quote, if, and and.
//!
//! Atoms evaluate to themselves. A pair whose head is not a special form is
//! handed to a HeadResolver; there is no environment or procedure
//! application here, so the default resolver rejects every such form.

use log::debug;

use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;

use crate::error::ErrorKind;
use crate::primitive::{SfsString, Symbol};
use crate::sexp::{Cons, Sexp};

use self::EvalErr::*;


pub type Ret = Result<Sexp, EvalErr>;

#[derive(Clone, Debug, PartialEq)]
pub enum EvalErr {
    InvalidArgument {
        given: Sexp,
        expected: Cow<'static, str>,
    },
    /// A form whose operand list is improper.
    InvalidSexp(Sexp),
    WrongArgumentCount {
        form: &'static str,
        given: usize,
        expected: usize,
    },
    UnrecognizedHead(Sexp),
}

/// Evaluation of pairs whose head is not a special form.
///
/// Implementations that need operand values can recurse with
/// eval(operand, self).
pub trait HeadResolver {
    fn resolve(&mut self, form: &Cons) -> Ret;
}

/// Resolver for a core with no procedures: every non-special head is an
/// error.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoApplication;

impl HeadResolver for NoApplication {
    fn resolve(&mut self, form: &Cons) -> Ret {
        Err(UnrecognizedHead(form.car().clone()))
    }
}


pub struct Interpreter<R: HeadResolver = NoApplication> {
    resolver: R,
}

impl Interpreter<NoApplication> {
    pub fn new() -> Self {
        Self::with_resolver(NoApplication)
    }
}

impl Default for Interpreter<NoApplication> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: HeadResolver> Interpreter<R> {
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn eval(&mut self, form: &Sexp) -> Ret {
        eval(form, &mut self.resolver)
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}


pub fn eval<R: HeadResolver + ?Sized>(form: &Sexp, resolver: &mut R) -> Ret {
    let cons = match <&Cons>::try_from(form) {
        Ok(cons) => cons,
        Err(atom) => return Ok(atom.clone()),
    };

    if let Ok(head) = <&Symbol>::try_from(cons.car()) {
        match head.as_str() {
            "quote" => {
                debug!("Special form: quote");
                return quote(cons);
            }
            "if" => {
                debug!("Special form: if");
                return eval_if(cons, resolver);
            }
            "and" => {
                debug!("Special form: and");
                return eval_and(cons, resolver);
            }
            _ => { /* Fallthrough */ }
        }
    }
    resolver.resolve(cons)
}

fn quote(form: &Cons) -> Ret {
    let args = exact_operands("quote", form, 1)?;
    Ok(args[0].clone())
}

fn eval_if<R: HeadResolver + ?Sized>(form: &Cons, resolver: &mut R) -> Ret {
    let args = exact_operands("if", form, 3)?;
    let test = eval(args[0], resolver)?;
    if boolean_test(test)? {
        eval(args[1], resolver)
    } else {
        eval(args[2], resolver)
    }
}

fn eval_and<R: HeadResolver + ?Sized>(form: &Cons, resolver: &mut R) -> Ret {
    for arg in operands(form)? {
        let val = eval(arg, resolver)?;
        if !boolean_test(val)? {
            return Ok(false.into());
        }
    }
    Ok(true.into())
}

/// Only the canonical Booleans are valid tests; nothing else is truthy.
fn boolean_test(val: Sexp) -> Result<bool, EvalErr> {
    match val {
        Sexp::Boolean(b) if b.is_true() => Ok(true),
        Sexp::Boolean(b) if b.is_false() => Ok(false),
        _ => Err(InvalidArgument {
            given: val,
            expected: Cow::Borrowed("a boolean"),
        }),
    }
}

fn operands(form: &Cons) -> Result<Vec<&Sexp>, EvalErr> {
    let mut res = Vec::<&Sexp>::new();
    for (arg, proper) in form.cdr() {
        if !proper {
            return Err(InvalidSexp(Sexp::Cons(form.clone())));
        }
        res.push(arg);
    }
    Ok(res)
}

fn exact_operands<'a>(
    name: &'static str,
    form: &'a Cons,
    expected: usize,
) -> Result<Vec<&'a Sexp>, EvalErr> {
    let args = operands(form)?;
    if args.len() != expected {
        return Err(WrongArgumentCount {
            form: name,
            given: args.len(),
            expected,
        });
    }
    Ok(args)
}


impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Eval Error] ")?;
        match self {
            InvalidArgument { given, expected } => write!(
                f,
                "Invalid argument: given {}, expected {}",
                given, expected
            ),
            InvalidSexp(val) => write!(f, "Invalid S-exp for evaluation: {}", val),
            WrongArgumentCount {
                form,
                given,
                expected,
            } => write!(
                f,
                "Wrong argument count for {}: given {}, expected {}",
                form, given, expected
            ),
            UnrecognizedHead(head) => {
                write!(f, "Cannot apply {}: not a special form", head)
            }
        }
    }
}

impl ErrorKind for EvalErr {
    fn reify(&self) -> Sexp {
        let reason = match self {
            InvalidArgument { .. } => "InvalidArgument",
            InvalidSexp(_) => "InvalidSexp",
            WrongArgumentCount { .. } => "WrongArgumentCount",
            UnrecognizedHead(_) => "UnrecognizedHead",
        };
        list!(
            SfsString::unbounded("EvalError"),
            SfsString::unbounded(reason),
            SfsString::unbounded(self.to_string()),
        )
    }
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
