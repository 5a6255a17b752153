//! Line-based terminal I/O.

use std::io::{self, BufRead, Write};

use shopcart::Prompt;

/// Reads answers line by line and writes informational output.
///
/// Error messages are written by the caller to a separate stream.
pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Write an informational message followed by a newline.
    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{message}")
    }

    /// Show `label` and read one line, without the trailing newline.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn read_line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label} ")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn ask(&mut self, label: &str) -> Option<String> {
        match self.read_line(label) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, label, "Failed to read answer, treating as cancelled");
                None
            }
        }
    }
}
