//! Observable application state types.
//!
//! This module defines where the session currently is ([`Phase`]), what the
//! user is being asked for ([`Prompt`]), how menu numbers map to commands
//! ([`MenuChoice`]), and the user-facing rejection messages ([`Notice`]).

use boxoffice_core::ReservationError;

use crate::InputError;

/// Position in the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the number of rows.
    AwaitingRows,
    /// Waiting for the number of seats in each row.
    AwaitingSeats {
        /// Row count entered in the previous step.
        rows: i64,
    },
    /// Waiting for a menu selection.
    Menu,
    /// Waiting for the row of a seat to buy.
    AwaitingRow,
    /// Waiting for the seat number within the chosen row.
    AwaitingSeat {
        /// Row entered in the previous step.
        row: i64,
    },
    /// Session has ended; further input is ignored.
    Closed,
}

impl Phase {
    /// Prompt shown while in this phase. `None` once closed.
    pub fn prompt(self) -> Option<Prompt> {
        match self {
            Self::AwaitingRows => Some(Prompt::Rows),
            Self::AwaitingSeats { .. } => Some(Prompt::SeatsPerRow),
            Self::Menu => Some(Prompt::MenuOption),
            Self::AwaitingRow => Some(Prompt::Row),
            Self::AwaitingSeat { .. } => Some(Prompt::SeatInRow),
            Self::Closed => None,
        }
    }
}

/// Request for a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Number of rows in the auditorium.
    Rows,
    /// Number of seats in each row.
    SeatsPerRow,
    /// Menu selection.
    MenuOption,
    /// Row of the seat to buy.
    Row,
    /// Seat number within the row.
    SeatInRow,
}

/// Menu commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `0`: leave the program.
    Exit,
    /// `1`: print the seating chart.
    ShowSeats,
    /// `2`: buy a ticket.
    BuyTicket,
    /// `3`: print statistics.
    Statistics,
}

impl MenuChoice {
    /// Map a menu number to a command. `None` for unknown options.
    pub fn from_number(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Exit),
            1 => Some(Self::ShowSeats),
            2 => Some(Self::BuyTicket),
            3 => Some(Self::Statistics),
            _ => None,
        }
    }
}

/// Message telling the user their input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Out-of-range coordinates or unusable auditorium dimensions.
    WrongInput,
    /// The chosen seat is taken.
    AlreadyPurchased,
    /// The line was not a number.
    NotANumber(InputError),
}

impl From<ReservationError> for Notice {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::InvalidInput => Self::WrongInput,
            ReservationError::AlreadyBooked => Self::AlreadyPurchased,
        }
    }
}
