//! Top-level read-eval driver over a line source.
//!
//! A Session yields one result per expression: extraction, reading, and
//! evaluation failures each produce an Err for that expression only, after
//! which the session carries on with the next one. An I/O failure is
//! reported once and then ends the session.

use log::warn;

use crate::config::Limits;
use crate::error::Error;
use crate::extractor::{ExtractError, Extractor};
use crate::interpreter::{HeadResolver, Interpreter, NoApplication};
use crate::reader::Reader;
use crate::sexp::Sexp;
use crate::stream::LineStream;


pub struct Session<S: LineStream, R: HeadResolver = NoApplication> {
    stream: S,
    extractor: Extractor,
    reader: Reader,
    interpreter: Interpreter<R>,

    last_text: Option<String>,
    finished: bool,
}

impl<S: LineStream> Session<S> {
    pub fn new(stream: S, limits: Limits) -> Self {
        Self::with_interpreter(stream, limits, Interpreter::new())
    }
}

impl<S: LineStream, R: HeadResolver> Session<S, R> {
    pub fn with_interpreter(stream: S, limits: Limits, interpreter: Interpreter<R>) -> Self {
        Self {
            stream,
            extractor: Extractor::new(&limits),
            reader: Reader::new(limits),
            interpreter,
            last_text: None,
            finished: false,
        }
    }

    pub fn stream(&self) -> &S {
        &self.stream
    }

    pub fn interpreter(&self) -> &Interpreter<R> {
        &self.interpreter
    }

    /// Text of the most recently extracted expression, if any.
    pub fn last_text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }

    fn step(&mut self, text: &str) -> Result<Sexp, Error> {
        let sexp = match self.reader.parse(text) {
            Ok(sexp) => sexp,
            Err(err) => {
                warn!("Discarding unreadable expression: {}", text);
                return Err(Error::new(Box::new(err)));
            }
        };
        match self.interpreter.eval(&sexp) {
            Ok(val) => Ok(val),
            Err(err) => {
                warn!("Evaluation of {} failed", sexp);
                Err(Error::new(Box::new(err)))
            }
        }
    }
}


impl<S: LineStream, R: HeadResolver> Iterator for Session<S, R> {
    type Item = Result<Sexp, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let text = match self.extractor.extract(&mut self.stream) {
            Ok(Some(text)) => text,
            Ok(None) => {
                self.finished = true;
                return None;
            }
            Err(ExtractError::Io(err)) => {
                warn!("Input failed; ending session");
                self.finished = true;
                return Some(Err(err.into()));
            }
            Err(err) => {
                warn!("Discarding expression: {}", err);
                self.last_text = None;
                return Some(Err(Error::new(Box::new(err))));
            }
        };

        let result = self.step(&text);
        self.last_text = Some(text);
        Some(result)
    }
}


#[cfg(test)]
#[path = "./session_test.rs"]
mod session_test;
