//! Line sources feeding the extractor.
//!
//! File and interactive input are consumed identically; only the prompt
//! (and history) of CliStream depend on being interactive.

use std::io;

pub mod file_stream;
pub mod string_stream;

#[cfg(feature = "cli")]
pub mod cli_stream;

pub use file_stream::FileStream;
pub use string_stream::StringStream;

#[cfg(feature = "cli")]
pub use cli_stream::CliStream;


pub trait LineStream {
    /// Next line, without its terminator, or None once input is exhausted.
    ///
    /// depth is the paren depth of the expression being accumulated.
    fn next_line(&mut self, depth: usize) -> Option<io::Result<String>>;

    /// Notification that text was extracted as one complete expression.
    fn finish_expr(&mut self, _text: &str) {}
}

impl<S: LineStream + ?Sized> LineStream for Box<S> {
    fn next_line(&mut self, depth: usize) -> Option<io::Result<String>> {
        (**self).next_line(depth)
    }

    fn finish_expr(&mut self, text: &str) {
        (**self).finish_expr(text)
    }
}
