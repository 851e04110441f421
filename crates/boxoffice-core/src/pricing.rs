//! Ticket pricing rule.
//!
//! Small rooms (fewer seats than the threshold) charge the front price for
//! every row. Larger rooms charge the front price for the first
//! `floor(rows / 2)` rows and the back price for the rest.

use crate::Layout;

/// Front-half ticket price in dollars.
pub const FRONT_PRICE: u32 = 10;

/// Back-half ticket price in dollars.
pub const BACK_PRICE: u32 = 8;

/// Capacity below which every seat costs the front price.
pub const SMALL_ROOM_THRESHOLD: u64 = 60;

/// Ticket prices for one auditorium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PricingPolicy {
    /// Price of a seat in the front half, and of every seat in a small room.
    pub front_price: u32,
    /// Price of a seat in the back half of a large room.
    pub back_price: u32,
    /// Rooms with fewer seats than this are priced uniformly.
    pub small_room_threshold: u64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            front_price: FRONT_PRICE,
            back_price: BACK_PRICE,
            small_room_threshold: SMALL_ROOM_THRESHOLD,
        }
    }
}

impl PricingPolicy {
    /// True if the auditorium is priced uniformly at the front price.
    pub fn is_small_room(&self, layout: Layout) -> bool {
        layout.capacity() < self.small_room_threshold
    }

    /// Price of any seat in `row` (1-based).
    ///
    /// Assumes `row` has already been validated against the layout.
    pub fn price(&self, layout: Layout, row: u32) -> u32 {
        if self.is_small_room(layout) || row <= layout.front_rows() {
            self.front_price
        } else {
            self.back_price
        }
    }
}
