//! Auditorium dimensions.

use crate::LayoutError;

/// Largest number of seats a single auditorium may hold.
pub const MAX_CAPACITY: u64 = 1_000_000;

/// Validated auditorium dimensions.
///
/// Both dimensions are positive and the capacity never exceeds
/// [`MAX_CAPACITY`]. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    rows: u32,
    seats_per_row: u32,
}

impl Layout {
    /// Validate and build a layout.
    pub fn new(rows: u32, seats_per_row: u32) -> Result<Self, LayoutError> {
        if rows == 0 || seats_per_row == 0 {
            return Err(LayoutError::Empty { rows, seats_per_row });
        }

        let capacity = u64::from(rows) * u64::from(seats_per_row);
        if capacity > MAX_CAPACITY {
            return Err(LayoutError::TooLarge { capacity, max: MAX_CAPACITY });
        }

        Ok(Self { rows, seats_per_row })
    }

    /// Validate dimensions read as signed integers from user input.
    ///
    /// Negative values are reported as [`LayoutError::Empty`]; values beyond
    /// `u32` are reported as [`LayoutError::TooLarge`].
    pub fn from_input(rows: i64, seats_per_row: i64) -> Result<Self, LayoutError> {
        let clamp = |value: i64| u32::try_from(value.max(0)).unwrap_or(u32::MAX);
        Self::new(clamp(rows), clamp(seats_per_row))
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of seats in every row.
    pub fn seats_per_row(&self) -> u32 {
        self.seats_per_row
    }

    /// Total number of seats.
    pub fn capacity(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.seats_per_row)
    }

    /// Number of rows in the front half: `floor(rows / 2)`.
    pub fn front_rows(&self) -> u32 {
        self.rows / 2
    }
}
