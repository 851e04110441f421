//! Fuzz target for the reservation operation
//!
//! # Strategy
//!
//! - Arbitrary dimensions, including zero and oversized
//! - Arbitrary selections, including negative and above the ceiling
//! - Arbitrary price policies
//!
//! # Invariants
//!
//! - A failed reservation NEVER changes the grid
//! - A successful reservation books exactly one seat at the policy price
//! - Current income NEVER exceeds total income

#![no_main]

use arbitrary::Arbitrary;
use boxoffice_core::{
    Layout, PricingPolicy, SeatGrid, SeatState, reserve,
    revenue::{current_income, total_income},
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Scenario {
    rows: u8,
    seats: u8,
    front_price: u16,
    back_price: u16,
    small_room_threshold: u16,
    selections: Vec<(i64, i64)>,
}

fuzz_target!(|scenario: Scenario| {
    let Ok(layout) = Layout::new(u32::from(scenario.rows), u32::from(scenario.seats)) else {
        return;
    };
    let pricing = PricingPolicy {
        front_price: u32::from(scenario.front_price),
        back_price: u32::from(scenario.back_price),
        small_room_threshold: u64::from(scenario.small_room_threshold),
    };
    let mut grid = SeatGrid::new(layout);

    for (row, seat) in scenario.selections {
        let before = grid.clone();
        match reserve(&mut grid, &pricing, row, seat) {
            Ok(booking) => {
                assert_eq!(grid.booked_count(), before.booked_count() + 1);
                assert_eq!(before.state(booking.seat), Some(SeatState::Available));
                assert_eq!(booking.price, pricing.price(layout, booking.seat.row));
            },
            Err(_) => assert_eq!(grid, before),
        }
        assert!(current_income(&grid, &pricing) <= total_income(layout, &pricing));
    }
});
