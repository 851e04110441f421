//! Application layer for Boxoffice
//!
//! Pure state machine and generic runtime for the interactive menu, so the
//! same code runs against a real terminal and against scripted input in
//! tests.
//!
//! # Components
//!
//! - [`App`]: menu state machine (setup prompts, menu dispatch, booking retries)
//! - [`Driver`]: trait for line-oriented I/O
//! - [`Runtime`]: generic loop feeding driver input to the App
//! - [`render`]: text for prompts, menu, seating chart and statistics

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod config;
mod driver;
mod event;
mod input;
pub mod render;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use config::{InputPolicy, RuntimeConfig};
pub use driver::Driver;
pub use event::AppEvent;
pub use input::{InputError, parse_integer};
pub use runtime::{Runtime, RuntimeError};
pub use state::{MenuChoice, Notice, Phase, Prompt};
