//! Terminal front end for Boxoffice.
//!
//! Provides command-line configuration and a line-oriented
//! [`TerminalDriver`] for the generic [`boxoffice_app::Runtime`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod terminal;

pub use config::{Args, ConfigError};
pub use terminal::{TerminalDriver, TerminalError};
