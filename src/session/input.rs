//! Line-oriented input.

use std::io::{self, BufRead, Write};

/// Source of trimmed input lines.
pub trait LineReader {
    /// Read the next line with surrounding whitespace removed.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// [`LineReader`] over any buffered reader, such as locked stdin.
pub struct LineInput<B> {
    inner: B,
    buf: Vec<u8>,
}

impl<B: BufRead> LineInput<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }
}

impl<B: BufRead> LineReader for LineInput<B> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        // A final line without a newline is still returned before EOF.
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        // Invalid UTF-8 becomes U+FFFD and fails later as a bad operand.
        Ok(Some(String::from_utf8_lossy(&self.buf).trim().to_string()))
    }
}

/// Print a prompt, flush, and read one line.
pub fn prompt<R: LineReader, W: Write>(
    reader: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    reader.read_line()
}
