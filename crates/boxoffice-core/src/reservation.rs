//! Reservation operation.
//!
//! Validates a 1-based `(row, seat)` selection and books it. Checks run in a
//! fixed order and stop at the first failure:
//!
//! 1. Row and seat must both lie in `1..=SELECTION_CEILING`, regardless of
//!    the auditorium size.
//! 2. A seat inside the grid must not already be booked.
//! 3. Row and seat must lie inside the auditorium.
//!
//! Rows or seats numbered above [`SELECTION_CEILING`] can never be booked,
//! even in larger auditoriums.

use crate::{PricingPolicy, ReservationError, Seat, SeatGrid};

/// Highest row or seat number accepted by [`reserve`].
pub const SELECTION_CEILING: i64 = 9;

/// A committed booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    /// The seat that was booked.
    pub seat: Seat,
    /// Ticket price in dollars.
    pub price: u32,
}

/// Book the seat at `row`, `seat` (both 1-based).
///
/// On success exactly one cell moves to booked and the ticket price is
/// returned. On failure the grid is untouched.
pub fn reserve(
    grid: &mut SeatGrid,
    pricing: &PricingPolicy,
    row: i64,
    seat: i64,
) -> Result<Booking, ReservationError> {
    let selectable = 1..=SELECTION_CEILING;
    if !selectable.contains(&row) || !selectable.contains(&seat) {
        tracing::debug!(row, seat, ceiling = SELECTION_CEILING, "selection above ceiling");
        return Err(ReservationError::InvalidInput);
    }

    // Both values are in 1..=9 here.
    let target = Seat::new(row as u32, seat as u32);

    match grid.state(target) {
        Some(state) if state.is_booked() => {
            tracing::debug!(%target, "seat already booked");
            return Err(ReservationError::AlreadyBooked);
        },
        Some(_) => {},
        None => {
            tracing::debug!(%target, layout = ?grid.layout(), "seat outside auditorium");
            return Err(ReservationError::InvalidInput);
        },
    }

    let price = pricing.price(grid.layout(), target.row);
    if !grid.book(target) {
        return Err(ReservationError::AlreadyBooked);
    }

    tracing::info!(%target, price, "seat booked");
    Ok(Booking { seat: target, price })
}
