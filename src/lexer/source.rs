use std::io::{BufRead, Cursor};

/// Supplies source text one line at a time.
///
/// `line_number` reports the 1-based number of the line most recently
/// returned by `next_line` (0 before the first call).
pub trait LineSource {
    fn next_line(&mut self) -> std::io::Result<Option<String>>;
    fn line_number(&self) -> i32;
}

/// A [`LineSource`] over any buffered reader. Line terminators (`\n` or
/// `\r\n`) are stripped.
pub struct LineReader<R> {
    reader: R,
    line_number: i32,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader {
            reader,
            line_number: 0,
        }
    }
}

impl LineReader<Cursor<String>> {
    pub fn from_string(source: String) -> Self {
        LineReader::new(Cursor::new(source))
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        self.line_number += 1;
        Ok(Some(line))
    }

    fn line_number(&self) -> i32 {
        self.line_number
    }
}
