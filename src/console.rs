//! Line-oriented input and output for the interactive calculator.

use std::io::{BufRead, Write};

use crate::Result;

/// Reads answers one line at a time and writes prompts.
pub trait Console {
    /// Next line without its terminator, or `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Writes `text` as-is; prompts rely on this to stay on the answer line.
    fn write(&mut self, text: &str) -> Result<()>;

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.write("\n")
    }

    /// Prints `question` and reads the answer.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        self.write(question)?;
        self.read_line()
    }
}

/// A [`Console`] over any reader and writer, such as stdin/stdout or an
/// in-memory script.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
