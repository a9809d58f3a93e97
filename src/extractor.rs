//! Module for extracting one balanced S-expression from a line stream.
//!
//! Lines are accumulated until parens balance. Blank and comment-only lines
//! are skipped, trailing comments and whitespace on a line collapse to a
//! single space, and exactly one expression may be completed per line.

use log::debug;

use std::fmt;
use std::io;

use crate::config::Limits;
use crate::error::ErrorKind;
use crate::primitive::SfsString;
use crate::sexp::Sexp;
use crate::stream::LineStream;

use self::ExprKind::*;
use self::ExtractError::*;


pub struct Extractor {
    max_len: usize,
}

#[derive(Debug)]
pub enum ExtractError {
    /// Input ended with parens still open.
    MissingClose,
    /// A ')' with no expression begun.
    LeadingClose(String),
    /// A ')' after the expression already finished.
    TooManyClose(String),
    TrailingContent(String),
    /// A string or list directly abutting a bare atom.
    InvalidAfterAtom(String),
    UnterminatedString(String),
    LineTooLong { len: usize, max: usize },
    ExpressionTooLong { len: usize, max: usize },
    Io(io::Error),
}

/// What the accumulated text looks like so far.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ExprKind {
    Nothing,
    StringAtom,
    BasicAtom,
    ParenExpr,
    Finished,
}

/// Per-extraction control state.
struct ExtractState {
    depth: usize,
    in_string: bool,
    escaped: bool,
    kind: ExprKind,
    text: String,
}


impl Extractor {
    pub fn new(limits: &Limits) -> Self {
        Self {
            max_len: limits.max_len,
        }
    }

    /// Returns the text of the next expression, trimmed of surrounding
    /// whitespace, or None at end of input.
    pub fn extract<S: LineStream + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<Option<String>, ExtractError> {
        let mut state = ExtractState::new();
        loop {
            let line = match source.next_line(state.depth) {
                Some(Ok(line)) => line,
                Some(Err(err)) => return Err(Io(err)),
                None => {
                    if state.depth == 0 {
                        return Ok(None);
                    }
                    return Err(MissingClose);
                }
            };

            if line.len() > self.max_len {
                return Err(LineTooLong {
                    len: line.len(),
                    max: self.max_len,
                });
            }
            let chars = line.chars().collect::<Vec<_>>();
            if is_useless(&chars) {
                continue;
            }
            if state.text.len() + line.len() > self.max_len {
                return Err(ExpressionTooLong {
                    len: state.text.len() + line.len(),
                    max: self.max_len,
                });
            }

            state.scan_line(&chars)?;
            if state.depth == 0 {
                break;
            }
        }

        let text = trim_expr(&state.text).to_string();
        debug!("Extracted expression: {}", text);
        source.finish_expr(&text);
        Ok(Some(text))
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&Limits::default())
    }
}


impl ExtractState {
    fn new() -> Self {
        Self {
            depth: 0,
            in_string: false,
            escaped: false,
            kind: Nothing,
            text: String::default(),
        }
    }

    fn scan_line(&mut self, chars: &[char]) -> Result<(), ExtractError> {
        let visible = next_visible(chars);
        for i in 0..chars.len() {
            if !self.in_string && !is_char_literal(chars, i) && is_useless_from(chars, &visible, i) {
                break;
            }

            self.step(chars, i)?;
            if self.kind == Finished {
                if !is_useless_from(chars, &visible, i + 1) {
                    let rest = chars[i + 1..].iter().collect::<String>();
                    if rest.trim_start().starts_with(')') {
                        return Err(TooManyClose(rest));
                    }
                    return Err(TrailingContent(rest));
                }
            }
            self.text.push(chars[i]);
        }

        if self.in_string {
            return Err(UnterminatedString(chars.iter().collect()));
        }
        // Line break (and any trailing comment) separates like whitespace.
        self.text.push(' ');
        Ok(())
    }

    fn step(&mut self, chars: &[char], i: usize) -> Result<(), ExtractError> {
        let c = chars[i];
        if self.in_string {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == '"' {
                self.in_string = false;
                if self.kind == StringAtom {
                    self.kind = Finished;
                }
            }
            return Ok(());
        }

        let rest = || chars[i..].iter().collect::<String>();
        let char_literal = is_char_literal(chars, i);
        match c {
            '(' if !char_literal => {
                if self.kind == BasicAtom {
                    return Err(InvalidAfterAtom(rest()));
                }
                self.depth += 1;
                self.kind = ParenExpr;
            }
            ')' if !char_literal => {
                if self.depth == 0 {
                    if self.kind == Nothing {
                        return Err(LeadingClose(rest()));
                    }
                    return Err(TooManyClose(rest()));
                }
                self.depth -= 1;
                if self.depth == 0 {
                    self.kind = Finished;
                }
            }
            '"' if !char_literal => {
                if self.kind == BasicAtom {
                    return Err(InvalidAfterAtom(rest()));
                }
                self.in_string = true;
                if self.kind != ParenExpr {
                    self.kind = StringAtom;
                }
            }
            _ if c.is_whitespace() && !char_literal => {
                if self.kind == BasicAtom {
                    self.kind = Finished;
                }
            }
            _ => {
                if self.kind != ParenExpr {
                    self.kind = BasicAtom;
                }
            }
        }
        Ok(())
    }
}

/// Whether chars[i] is the body of a #\c literal, e.g. the paren in #\(.
fn is_char_literal(chars: &[char], i: usize) -> bool {
    i >= 2 && chars[i - 1] == '\\' && chars[i - 2] == '#'
}

/// Whether chars hold only whitespace, possibly followed by a comment.
fn is_useless(chars: &[char]) -> bool {
    match chars.iter().find(|c| !c.is_whitespace()) {
        None => true,
        Some(c) => *c == ';',
    }
}

/// For each position, the index of the first non-whitespace char at or
/// after it. One extra trailing entry stands for the end of the line.
fn next_visible(chars: &[char]) -> Vec<Option<usize>> {
    let mut visible = vec![None; chars.len() + 1];
    for i in (0..chars.len()).rev() {
        visible[i] = if chars[i].is_whitespace() {
            visible[i + 1]
        } else {
            Some(i)
        };
    }
    visible
}

/// is_useless(&chars[i..]), answered from next_visible's table.
fn is_useless_from(chars: &[char], visible: &[Option<usize>], i: usize) -> bool {
    match visible.get(i).copied().flatten() {
        None => true,
        Some(j) => chars[j] == ';',
    }
}

/// Trims surrounding whitespace, keeping the character of a trailing #\
/// literal such as the space in `#\ `.
fn trim_expr(text: &str) -> &str {
    let body = text.trim_start();
    let trimmed = body.trim_end();
    if !trimmed.ends_with("#\\") {
        return trimmed;
    }
    match body[trimmed.len()..].chars().next() {
        Some(c) => &body[..trimmed.len() + c.len_utf8()],
        None => trimmed,
    }
}


impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Parse Error] ")?;
        match self {
            MissingClose => write!(f, "missing closing parenthesis"),
            LeadingClose(rest) => write!(f, "cannot start with ')': '{}'", rest),
            TooManyClose(rest) => write!(f, "too many closing parentheses: '{}'", rest),
            TrailingContent(rest) => {
                write!(f, "invalid trailing chars after S-expression: '{}'", rest)
            }
            InvalidAfterAtom(rest) => write!(f, "invalid content after atom: '{}'", rest),
            UnterminatedString(line) => write!(f, "non-terminated string on line: '{}'", line),
            LineTooLong { len, max } => {
                write!(f, "line of {} bytes exceeds the limit of {}", len, max)
            }
            ExpressionTooLong { len, max } => write!(
                f,
                "S-expression of {} bytes exceeds the limit of {}",
                len, max
            ),
            Io(err) => write!(f, "reading input failed: {}", err),
        }
    }
}

impl ErrorKind for ExtractError {
    fn reify(&self) -> Sexp {
        let reason = match self {
            MissingClose => "MissingClose",
            LeadingClose(_) => "LeadingClose",
            TooManyClose(_) => "TooManyClose",
            TrailingContent(_) => "TrailingContent",
            InvalidAfterAtom(_) => "InvalidAfterAtom",
            UnterminatedString(_) => "UnterminatedString",
            LineTooLong { .. } => "LineTooLong",
            ExpressionTooLong { .. } => "ExpressionTooLong",
            Io(_) => "Io",
        };
        list!(
            SfsString::unbounded("ExtractError"),
            SfsString::unbounded(reason),
            SfsString::unbounded(self.to_string()),
        )
    }
}


#[cfg(test)]
#[path = "./extractor_test.rs"]
mod extractor_test;
