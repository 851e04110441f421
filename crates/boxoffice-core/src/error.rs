//! Error types for the Boxoffice core.
//!
//! Both error families are recoverable: the interactive layer reports them to
//! the user and asks again.

use thiserror::Error;

/// Errors produced when validating auditorium dimensions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Rows or seats per row is zero.
    #[error("auditorium needs at least one row and one seat (got {rows}x{seats_per_row})")]
    Empty {
        /// Requested row count
        rows: u32,
        /// Requested seats per row
        seats_per_row: u32,
    },

    /// Total seat count exceeds [`crate::MAX_CAPACITY`].
    #[error("auditorium of {capacity} seats exceeds the maximum of {max}")]
    TooLarge {
        /// Requested capacity
        capacity: u64,
        /// Largest supported capacity
        max: u64,
    },
}

/// Reasons a reservation attempt is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationError {
    /// Row or seat lies outside the selectable range or the auditorium.
    #[error("wrong input")]
    InvalidInput,

    /// The seat has already been purchased.
    #[error("seat already purchased")]
    AlreadyBooked,
}
