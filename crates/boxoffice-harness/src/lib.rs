//! Deterministic simulation harness for Boxoffice sessions.
//!
//! Provides a [`ScriptedDriver`] that feeds queued lines to the
//! [`boxoffice_app::Runtime`] and captures everything written, so complete
//! sessions run without a terminal.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the common
//! session invariants.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod invariants;
pub mod scripted_driver;

pub use invariants::{
    BookingsNeverReleased, BookingsWithinLayout, IncomeWithinCapacity, Invariant,
    InvariantRegistry, InvariantResult, LayoutFixed, SessionSnapshot, StateSnapshot,
    StatisticsMatchGrid, Violation,
};
pub use scripted_driver::ScriptedDriver;
