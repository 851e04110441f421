//! Seat grid.
//!
//! A [`SeatGrid`] is a fixed `rows x seats_per_row` table of [`SeatState`]
//! cells stored row-major. Coordinates in the public API are 1-based
//! ([`Seat`]); the 0-based index never leaves this module.
//!
//! # Invariants
//!
//! - The layout never changes after construction.
//! - A cell only moves `Available -> Booked`, at most once.

use std::fmt;

use crate::Layout;

/// State of a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeatState {
    /// Seat can be purchased.
    #[default]
    Available,
    /// Seat has been purchased.
    Booked,
}

impl SeatState {
    /// Single-character symbol used in the seating chart.
    pub fn symbol(self) -> char {
        match self {
            Self::Available => 'S',
            Self::Booked => 'B',
        }
    }

    /// True if the seat has been purchased.
    pub fn is_booked(self) -> bool {
        self == Self::Booked
    }
}

/// 1-based seat coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seat {
    /// Row number, starting at 1 nearest the screen.
    pub row: u32,
    /// Seat number within the row, starting at 1.
    pub seat: u32,
}

impl Seat {
    /// Create a coordinate.
    pub fn new(row: u32, seat: u32) -> Self {
        Self { row, seat }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} seat {}", self.row, self.seat)
    }
}

/// Fixed-size table of seat states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    layout: Layout,
    cells: Vec<SeatState>,
}

impl SeatGrid {
    /// Create a grid with every seat available.
    pub fn new(layout: Layout) -> Self {
        let cells = vec![SeatState::Available; layout.capacity() as usize];
        Self { layout, cells }
    }

    /// Dimensions of the grid.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// State of a seat. `None` if the coordinate lies outside the grid.
    pub fn state(&self, seat: Seat) -> Option<SeatState> {
        self.index(seat).map(|i| self.cells[i])
    }

    /// Mark a seat as booked.
    ///
    /// Returns `false` without mutating anything if the coordinate lies
    /// outside the grid or the seat is already booked.
    pub(crate) fn book(&mut self, seat: Seat) -> bool {
        match self.index(seat) {
            Some(i) if self.cells[i] == SeatState::Available => {
                self.cells[i] = SeatState::Booked;
                true
            },
            _ => false,
        }
    }

    /// Rows in order, front to back, each as a slice of seat states.
    pub fn rows(&self) -> impl Iterator<Item = &[SeatState]> {
        self.cells.chunks(self.layout.seats_per_row() as usize)
    }

    /// Number of booked seats.
    pub fn booked_count(&self) -> u64 {
        self.cells.iter().filter(|state| state.is_booked()).count() as u64
    }

    /// Coordinates of every booked seat, in row-major order.
    pub fn booked_seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.rows().zip(1..).flat_map(|(cells, row)| {
            cells
                .iter()
                .zip(1..)
                .filter(|(state, _)| state.is_booked())
                .map(move |(_, seat)| Seat::new(row, seat))
        })
    }

    /// Row-major index of a 1-based coordinate.
    fn index(&self, seat: Seat) -> Option<usize> {
        let in_rows = (1..=self.layout.rows()).contains(&seat.row);
        let in_row = (1..=self.layout.seats_per_row()).contains(&seat.seat);
        if !(in_rows && in_row) {
            return None;
        }

        let row = (seat.row - 1) as usize;
        let col = (seat.seat - 1) as usize;
        Some(row * self.layout.seats_per_row() as usize + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: u32, seats: u32) -> SeatGrid {
        SeatGrid::new(Layout::new(rows, seats).unwrap())
    }

    #[test]
    fn new_grid_is_all_available() {
        let grid = grid(3, 4);
        assert_eq!(grid.booked_count(), 0);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 4));
        assert!(grid.rows().flatten().all(|s| *s == SeatState::Available));
    }

    #[test]
    fn state_outside_grid_is_none() {
        let grid = grid(2, 3);
        assert_eq!(grid.state(Seat::new(0, 1)), None);
        assert_eq!(grid.state(Seat::new(1, 0)), None);
        assert_eq!(grid.state(Seat::new(3, 1)), None);
        assert_eq!(grid.state(Seat::new(1, 4)), None);
        assert_eq!(grid.state(Seat::new(2, 3)), Some(SeatState::Available));
    }

    #[test]
    fn out_of_row_seat_does_not_alias_next_row() {
        let mut grid = grid(2, 2);
        assert!(!grid.book(Seat::new(1, 3)));
        assert_eq!(grid.state(Seat::new(2, 1)), Some(SeatState::Available));
        assert_eq!(grid.booked_count(), 0);
    }

    #[test]
    fn book_is_one_way() {
        let mut grid = grid(2, 2);
        assert!(grid.book(Seat::new(2, 1)));
        assert!(!grid.book(Seat::new(2, 1)));
        assert_eq!(grid.state(Seat::new(2, 1)), Some(SeatState::Booked));
        assert_eq!(grid.booked_count(), 1);
    }

    #[test]
    fn booked_seats_in_row_major_order() {
        let mut grid = grid(3, 3);
        grid.book(Seat::new(3, 1));
        grid.book(Seat::new(1, 2));
        grid.book(Seat::new(2, 3));

        let booked: Vec<_> = grid.booked_seats().collect();
        assert_eq!(booked, vec![Seat::new(1, 2), Seat::new(2, 3), Seat::new(3, 1)]);
    }

    #[test]
    fn symbols() {
        assert_eq!(SeatState::Available.symbol(), 'S');
        assert_eq!(SeatState::Booked.symbol(), 'B');
    }
}
