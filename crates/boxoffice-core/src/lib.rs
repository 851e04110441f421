//! Core reservation logic for Boxoffice.
//!
//! Pure, synchronous building blocks for a single auditorium: the seat grid,
//! the pricing rule, revenue and statistics, and the reservation operation.
//! Nothing here performs I/O; callers own the grid and pass it in.
//!
//! # Components
//!
//! - [`Layout`]: validated auditorium dimensions
//! - [`SeatGrid`]: fixed-size table of [`SeatState`] cells
//! - [`PricingPolicy`]: front/back ticket prices and the small-room threshold
//! - [`revenue`]: current and maximum income
//! - [`Statistics`]: purchase count, occupancy and income report
//! - [`reserve`]: validated booking of a single seat

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod grid;
pub mod layout;
pub mod pricing;
pub mod reservation;
pub mod revenue;
pub mod stats;

pub use error::{LayoutError, ReservationError};
pub use grid::{Seat, SeatGrid, SeatState};
pub use layout::{Layout, MAX_CAPACITY};
pub use pricing::PricingPolicy;
pub use reservation::{Booking, SELECTION_CEILING, reserve};
pub use stats::Statistics;
