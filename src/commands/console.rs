//! Line-based input from a reader, normally stdin

use crate::engine::InputProvider;
use std::io::{self, BufRead, Write};

/// Prompts on a writer and reads answers line by line
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl LineInput<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, read from stdin
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> InputProvider for LineInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }

        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_and_writes_prompts() {
        let mut out = Vec::new();
        let mut input = LineInput::new(Cursor::new("a\r\nhello world\n"), &mut out);

        assert_eq!(input.read_line("Letter").unwrap().as_deref(), Some("a"));
        assert_eq!(
            input.read_line("Name").unwrap().as_deref(),
            Some("hello world")
        );
        assert_eq!(input.read_line("More").unwrap(), None);

        assert_eq!(String::from_utf8(out).unwrap(), "Letter: Name: More: ");
    }

    #[test]
    fn yes_no_defaults_to_no() {
        let mut input = LineInput::new(Cursor::new("Y\nmaybe\n"), io::sink());
        assert!(input.read_yes_no("Hint?").unwrap());
        assert!(!input.read_yes_no("Hint?").unwrap());
        // End of input
        assert!(!input.read_yes_no("Hint?").unwrap());
    }
}
