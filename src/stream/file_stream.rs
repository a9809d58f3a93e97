use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use super::LineStream;


pub struct FileStream {
    path: PathBuf,
    reader: Lines<BufReader<File>>,
    line: usize,
}

impl FileStream {
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        Ok(Self {
            path: path.as_ref().to_path_buf(),
            reader: reader.lines(),
            line: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines read so far.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl LineStream for FileStream {
    fn next_line(&mut self, _depth: usize) -> Option<io::Result<String>> {
        let res = self.reader.next()?;
        self.line += 1;
        Some(res)
    }
}
