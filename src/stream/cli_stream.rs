use rustyline::error::ReadlineError;
use rustyline::Editor;

use std::io;

use super::LineStream;


/// Interactive input through rustyline.
///
/// The prompt shows the pending paren depth and indents two spaces per
/// open paren.
pub struct CliStream {
    editor: Editor<()>,
}

impl CliStream {
    pub fn new() -> CliStream {
        CliStream {
            editor: Editor::<()>::new(),
        }
    }

    fn prompt(depth: usize) -> String {
        format!("SFS:{} > {}", depth, "  ".repeat(depth))
    }
}

impl Default for CliStream {
    fn default() -> Self {
        Self::new()
    }
}


impl LineStream for CliStream {
    fn next_line(&mut self, depth: usize) -> Option<io::Result<String>> {
        loop {
            match self.editor.readline(&Self::prompt(depth)) {
                Ok(line) => return Some(Ok(line)),
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    if depth > 0 {
                        // Ending input mid-expression abandons it.
                        return None;
                    }
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    return None;
                }
                Err(ReadlineError::Io(err)) => return Some(Err(err)),
                Err(err) => {
                    return Some(Err(io::Error::new(io::ErrorKind::Other, err.to_string())));
                }
            }
        }
    }

    fn finish_expr(&mut self, text: &str) {
        self.editor.add_history_entry(text);
    }
}
