//! Fixed-capacity text accumulation for Strings and Symbols.

use std::fmt;


/// Append-only text with a checked character capacity.
///
/// Pushing past capacity is an error; the buffer never truncates.
#[derive(Clone, Debug)]
pub struct TextBuffer {
    text: String,
    len: usize,
    capacity: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextOverflow {
    pub capacity: usize,
}

impl TextBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::default(),
            len: 0,
            capacity,
        }
    }

    pub fn push(&mut self, c: char) -> Result<(), TextOverflow> {
        if self.len >= self.capacity {
            return Err(TextOverflow {
                capacity: self.capacity,
            });
        }
        self.text.push(c);
        self.len += 1;
        Ok(())
    }

    pub fn push_str<S: AsRef<str>>(&mut self, s: S) -> Result<(), TextOverflow> {
        for c in s.as_ref().chars() {
            self.push(c)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for TextOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "text exceeds capacity of {} characters", self.capacity)
    }
}


#[cfg(test)]
#[path = "./text_buffer_test.rs"]
mod text_buffer_test;
