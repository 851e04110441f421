//! Scripted driver implementing the Driver trait.
//!
//! `ScriptedDriver` provides the same interface as the terminal driver but
//! for deterministic testing. It implements [`Driver`] so the same
//! [`boxoffice_app::Runtime`] orchestration code runs in both production and
//! simulation.

use std::{collections::VecDeque, convert::Infallible};

use boxoffice_app::Driver;

/// Scripted driver for deterministic testing.
///
/// Input lines are consumed in order; once they run out the driver reports
/// end of input. Every line written is appended to a transcript.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDriver {
    pending: VecDeque<String>,
    transcript: Vec<String>,
    stopped: bool,
}

impl ScriptedDriver {
    /// Create a driver with no queued input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver that will answer with `lines`, in order.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { pending: lines.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Queue another input line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.pending.push_back(line.into());
    }

    /// Number of input lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Everything written so far, one entry per `write_line` call.
    pub fn writes(&self) -> &[String] {
        &self.transcript
    }

    /// Everything written so far, joined as terminal output.
    pub fn transcript(&self) -> String {
        self.transcript.join("\n")
    }

    /// True once the runtime has stopped the driver.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Driver for ScriptedDriver {
    type Error = Infallible;

    fn read_line(&mut self) -> Result<Option<String>, Self::Error> {
        let line = self.pending.pop_front();
        tracing::trace!(?line, "scripted input");
        Ok(line)
    }

    fn write_line(&mut self, text: &str) -> Result<(), Self::Error> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}
