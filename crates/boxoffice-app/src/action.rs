//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use crate::{InputError, Notice, Prompt};

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Ask the user for a number.
    Prompt(Prompt),

    /// Show the main menu.
    ShowMenu,

    /// Show the seating chart.
    ShowSeats,

    /// Show sales statistics.
    ShowStatistics,

    /// Show the price of a ticket that was just booked.
    ShowTicketPrice {
        /// Price in dollars.
        price: u32,
    },

    /// Tell the user why their input was rejected.
    Notify(Notice),

    /// Stop with an unrecoverable input error.
    Abort(InputError),

    /// Quit the application.
    Quit,
}
