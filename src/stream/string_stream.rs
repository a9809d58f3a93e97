use std::collections::VecDeque;
use std::io;

use super::LineStream;


/// In-memory text served line by line.
pub struct StringStream {
    lines: VecDeque<String>,
}

impl StringStream {
    pub fn new<S: AsRef<str>>(s: S) -> StringStream {
        StringStream {
            lines: s.as_ref().lines().map(str::to_string).collect(),
        }
    }
}

impl LineStream for StringStream {
    fn next_line(&mut self, _depth: usize) -> Option<io::Result<String>> {
        self.lines.pop_front().map(Ok)
    }
}
