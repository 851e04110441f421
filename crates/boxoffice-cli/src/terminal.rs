//! Terminal driver for the box office.
//!
//! Implements the [`Driver`] trait over any buffered reader and writer.
//! The binary uses locked stdin and stdout; tests use in-memory buffers.
//! Input bytes that are not UTF-8 are replaced rather than rejected, so the
//! App sees them as an ordinary unparseable line.

use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

use boxoffice_app::Driver;
use thiserror::Error;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Line-oriented terminal driver implementing the [`Driver`] trait.
pub struct TerminalDriver<R, W> {
    input: R,
    output: W,
    buffer: Vec<u8>,
}

impl TerminalDriver<StdinLock<'static>, StdoutLock<'static>> {
    /// Driver over the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> TerminalDriver<R, W> {
    /// Create a driver reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, buffer: Vec::new() }
    }

    /// Consume the driver and return the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Driver for TerminalDriver<R, W> {
    type Error = TerminalError;

    fn read_line(&mut self) -> Result<Option<String>, Self::Error> {
        self.buffer.clear();
        if self.input.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&self.buffer);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_line(&mut self, text: &str) -> Result<(), Self::Error> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn stop(&mut self) {
        if let Err(err) = self.output.flush() {
            tracing::warn!(%err, "failed to flush output");
        }
    }
}
