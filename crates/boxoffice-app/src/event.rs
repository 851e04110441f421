//! Application input events.
//!
//! This module defines [`AppEvent`], the inputs that drive the
//! [`crate::App`] state machine. Every event comes from the driver's line
//! source except [`AppEvent::Start`], which the runtime sends once.

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Session is starting; nothing has been shown yet.
    Start,

    /// A line of user input, without the trailing newline.
    Line(String),

    /// The input source is exhausted.
    EndOfInput,
}
