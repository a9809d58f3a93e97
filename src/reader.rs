//! Module for reading extracted S-expression text into a Sexp tree.
//!
//! Reading is recursive descent over a char slice. The position is an
//! explicit cursor passed by reference through every call, so the elements
//! of a list continue from wherever the previous element stopped.

use log::trace;

use std::fmt;

use crate::config::Limits;
use crate::error::ErrorKind;
use crate::primitive::{SfsString, Symbol, TextBuffer, TextOverflow};
use crate::sexp::{ConsList, Sexp};

use self::ReadError::*;

const NAMED_CHARACTERS: [(&str, char); 2] = [("space", ' '), ("newline", '\n')];


pub struct Reader {
    limits: Limits,
    depth: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReadError {
    /// Input ended inside a list, string, or character literal.
    UnexpectedEnd { pos: usize },
    UnmatchedClose { pos: usize },
    MalformedAtom(String),
    TextTooLong { fragment: String, capacity: usize },
    DepthOverflow { max_depth: usize },
    TrailingContent(String),
}

impl Reader {
    pub fn new(limits: Limits) -> Self {
        Self { limits, depth: 0 }
    }

    /// Read exactly one datum from text; anything but whitespace after it
    /// is an error.
    pub fn parse<S: AsRef<str>>(&mut self, text: S) -> Result<Sexp, ReadError> {
        let chars = text.as_ref().chars().collect::<Vec<_>>();
        let mut here = 0;
        self.depth = 0;

        skip_whitespace(&chars, &mut here);
        let sexp = self.read(&chars, &mut here)?;
        skip_whitespace(&chars, &mut here);
        if here < chars.len() {
            return Err(TrailingContent(chars[here..].iter().collect()));
        }
        Ok(sexp)
    }

    /// Read the datum starting at here, leaving here just past it.
    pub fn read(&mut self, text: &[char], here: &mut usize) -> Result<Sexp, ReadError> {
        match text.get(*here) {
            None => Err(UnexpectedEnd { pos: *here }),
            Some('(') => {
                if text.get(*here + 1) == Some(&')') {
                    *here += 2;
                    return Ok(Sexp::Nil);
                }
                *here += 1;

                if self.depth >= self.limits.max_depth {
                    return Err(DepthOverflow {
                        max_depth: self.limits.max_depth,
                    });
                }
                self.depth += 1;
                let result = self.read_pair(text, here);
                self.depth -= 1;
                result
            }
            Some(')') => Err(UnmatchedClose { pos: *here }),
            Some(_) => self.read_atom(text, here),
        }
    }

    /// Read list elements after an opening paren, through the closing one.
    pub fn read_pair(&mut self, text: &[char], here: &mut usize) -> Result<Sexp, ReadError> {
        let mut elements = ConsList::new();
        loop {
            skip_whitespace(text, here);
            match text.get(*here) {
                None => return Err(UnexpectedEnd { pos: *here }),
                Some(')') => {
                    *here += 1;
                    return Ok(elements.release());
                }
                Some(_) => {
                    let element = self.read(text, here)?;
                    elements.append(element);
                }
            }
        }
    }

    pub fn read_atom(&mut self, text: &[char], here: &mut usize) -> Result<Sexp, ReadError> {
        let start = *here;
        let c = match text.get(start) {
            Some(c) => *c,
            None => return Err(UnexpectedEnd { pos: start }),
        };
        let next = text.get(start + 1).copied();

        if c == '#' && (next == Some('t') || next == Some('f')) && at_delimiter(text, start + 2) {
            trace!("Read boolean @ {}", start);
            *here += 2;
            return Ok(Sexp::from(next == Some('t')));
        }
        if c == '"' {
            trace!("Read string @ {}", start);
            return self.read_string(text, here);
        }
        let signed = (c == '+' || c == '-') && next.map_or(false, |d| d.is_ascii_digit());
        if signed || c.is_ascii_digit() {
            trace!("Read integer @ {}", start);
            return read_integer(text, here);
        }
        if c == '#' && next == Some('\\') {
            trace!("Read character @ {}", start);
            return read_character(text, here);
        }

        trace!("Read symbol @ {}", start);
        self.read_symbol(text, here)
    }

    fn read_string(&mut self, text: &[char], here: &mut usize) -> Result<Sexp, ReadError> {
        let start = *here;
        let mut buffer = TextBuffer::with_capacity(self.limits.text_capacity);
        *here += 1;
        loop {
            let c = match text.get(*here) {
                Some(c) => *c,
                None => return Err(UnexpectedEnd { pos: *here }),
            };
            *here += 1;

            let pushed = match c {
                '"' => break,
                '\\' => {
                    let escaped = match text.get(*here) {
                        Some(e) => *e,
                        None => return Err(UnexpectedEnd { pos: *here }),
                    };
                    *here += 1;
                    match SfsString::unescape_char(escaped) {
                        Some(decoded) => buffer.push(decoded),
                        None => buffer.push('\\').and_then(|_| buffer.push(escaped)),
                    }
                }
                _ => buffer.push(c),
            };
            if let Err(overflow) = pushed {
                return Err(overflow_error(text, start, *here, overflow));
            }
        }

        if !at_delimiter(text, *here) {
            return Err(MalformedAtom(token_at(text, start)));
        }
        Ok(SfsString::from(buffer).into())
    }

    fn read_symbol(&mut self, text: &[char], here: &mut usize) -> Result<Sexp, ReadError> {
        let start = *here;
        let mut buffer = TextBuffer::with_capacity(self.limits.text_capacity);
        while !at_delimiter(text, *here) {
            if let Err(overflow) = buffer.push(text[*here]) {
                return Err(overflow_error(text, start, *here, overflow));
            }
            *here += 1;
        }

        if buffer.is_empty() {
            return Err(MalformedAtom(token_at(text, start)));
        }
        Ok(Symbol::from(buffer).into())
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}


/// Read one datum from text using default limits.
pub fn parse<S: AsRef<str>>(text: S) -> Result<Sexp, ReadError> {
    Reader::default().parse(text)
}

fn read_integer(text: &[char], here: &mut usize) -> Result<Sexp, ReadError> {
    let start = *here;
    if text[start] == '+' || text[start] == '-' {
        *here += 1;
    }
    while text.get(*here).map_or(false, |c| c.is_ascii_digit()) {
        *here += 1;
    }

    if !at_delimiter(text, *here) {
        return Err(MalformedAtom(token_at(text, start)));
    }
    let digits = text[start..*here].iter().collect::<String>();
    match digits.parse::<i64>() {
        Ok(i) => Ok(i.into()),
        Err(_) => Err(MalformedAtom(digits)),
    }
}

fn read_character(text: &[char], here: &mut usize) -> Result<Sexp, ReadError> {
    let start = *here;
    let body = start + 2;
    for (name, c) in NAMED_CHARACTERS.iter() {
        let len = name.chars().count();
        let matches = text.len() >= body + len
            && text[body..body + len].iter().copied().eq(name.chars())
            && at_delimiter(text, body + len);
        if matches {
            *here = body + len;
            return Ok(Sexp::Character(*c));
        }
    }

    let c = match text.get(body) {
        Some(c) => *c,
        None => return Err(UnexpectedEnd { pos: body }),
    };
    *here = body + 1;
    if !at_delimiter(text, *here) {
        return Err(MalformedAtom(token_at(text, start)));
    }
    Ok(Sexp::Character(c))
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}

fn at_delimiter(text: &[char], pos: usize) -> bool {
    text.get(pos).map_or(true, |c| is_delimiter(*c))
}

fn skip_whitespace(text: &[char], here: &mut usize) {
    while text.get(*here).map_or(false, |c| c.is_whitespace()) {
        *here += 1;
    }
}

/// The run of non-delimiters starting at start, for error context.
fn token_at(text: &[char], start: usize) -> String {
    let mut end = start;
    while end < text.len() && (end == start || !is_delimiter(text[end])) {
        end += 1;
    }
    text[start..end].iter().collect()
}

fn overflow_error(text: &[char], start: usize, end: usize, overflow: TextOverflow) -> ReadError {
    TextTooLong {
        fragment: text[start..end.min(text.len())].iter().collect(),
        capacity: overflow.capacity,
    }
}


impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Read Error] ")?;
        match self {
            UnexpectedEnd { pos } => write!(f, "Unexpected end of input @ {}", pos),
            UnmatchedClose { pos } => write!(f, "Unmatched ')' @ {}", pos),
            MalformedAtom(atom) => write!(f, "Malformed atom: '{}'", atom),
            TextTooLong { fragment, capacity } => write!(
                f,
                "Text longer than {} characters: '{}'",
                capacity, fragment
            ),
            DepthOverflow { max_depth } => {
                write!(f, "Lists nested deeper than {}", max_depth)
            }
            TrailingContent(rest) => write!(f, "Trailing content after datum: '{}'", rest),
        }
    }
}

impl ErrorKind for ReadError {
    fn reify(&self) -> Sexp {
        let reason = match self {
            UnexpectedEnd { .. } => "UnexpectedEnd",
            UnmatchedClose { .. } => "UnmatchedClose",
            MalformedAtom(_) => "MalformedAtom",
            TextTooLong { .. } => "TextTooLong",
            DepthOverflow { .. } => "DepthOverflow",
            TrailingContent(_) => "TrailingContent",
        };
        list!(
            SfsString::unbounded("ReadError"),
            SfsString::unbounded(reason),
            SfsString::unbounded(self.to_string()),
        )
    }
}


#[cfg(test)]
#[path = "./reader_test.rs"]
mod reader_test;
