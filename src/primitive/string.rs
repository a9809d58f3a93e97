use std::fmt;

use super::text_buffer::{TextBuffer, TextOverflow};
use crate::config::DEFAULT_TEXT_CAPACITY;


#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SfsString(String);

impl SfsString {
    pub fn new<S: AsRef<str>>(s: S) -> Result<Self, TextOverflow> {
        Self::with_capacity(s, DEFAULT_TEXT_CAPACITY)
    }

    pub fn with_capacity<S: AsRef<str>>(s: S, capacity: usize) -> Result<Self, TextOverflow> {
        let mut buffer = TextBuffer::with_capacity(capacity);
        buffer.push_str(s)?;
        Ok(Self::from(buffer))
    }

    /// Text generated by the interpreter itself (e.g. reified errors) rather
    /// than read from input; never subject to the reader's capacity.
    pub fn unbounded<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    fn escape_char(c: char) -> Option<&'static str> {
        match c {
            '"' => Some("\\\""),
            '\\' => Some("\\\\"),
            '\n' => Some("\\n"),
            '\t' => Some("\\t"),
            _ => None,
        }
    }

    /// Decode the character following a backslash in a string literal.
    pub fn unescape_char(c: char) -> Option<char> {
        match c {
            '"' => Some('"'),
            '\\' => Some('\\'),
            'n' => Some('\n'),
            't' => Some('\t'),
            _ => None,
        }
    }
}

impl From<TextBuffer> for SfsString {
    fn from(buffer: TextBuffer) -> Self {
        Self(buffer.into_string())
    }
}


/// Writes the literal form; use as_str for the raw contents.
impl fmt::Display for SfsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for c in self.0.chars() {
            match Self::escape_char(c) {
                Some(escaped) => write!(f, "{}", escaped)?,
                None => write!(f, "{}", c)?,
            }
        }
        write!(f, "\"")
    }
}
