//! Property-based tests for pricing, revenue and reservations.

use boxoffice_core::{
    Layout, PricingPolicy, ReservationError, SELECTION_CEILING, Seat, SeatGrid, SeatState,
    Statistics, reserve,
    revenue::{current_income, total_income},
};
use proptest::prelude::*;

/// Layouts up to 12x12 so both small and large rooms, and seats above the
/// selection ceiling, are covered.
fn layout_strategy() -> impl Strategy<Value = Layout> {
    (1u32..=12, 1u32..=12)
        .prop_filter_map("valid layout", |(rows, seats)| Layout::new(rows, seats).ok())
}

/// Selections including out-of-range and negative values.
fn selection_strategy() -> impl Strategy<Value = (i64, i64)> {
    (-2i64..=14, -2i64..=14)
}

proptest! {
    /// Property: small rooms charge the front price for every row
    #[test]
    fn prop_small_room_is_uniform(layout in layout_strategy()) {
        let pricing = PricingPolicy::default();
        prop_assume!(layout.capacity() < 60);

        for row in 1..=layout.rows() {
            prop_assert_eq!(pricing.price(layout, row), pricing.front_price);
        }
    }

    /// Property: large rooms charge the front price for exactly floor(rows/2) rows
    #[test]
    fn prop_large_room_front_rows(rows in 1u32..=40, seats in 1u32..=40) {
        let layout = Layout::new(rows, seats).unwrap();
        let pricing = PricingPolicy::default();
        prop_assume!(layout.capacity() >= 60);

        let front = (1..=rows).filter(|&r| pricing.price(layout, r) == pricing.front_price).count();
        prop_assert_eq!(front as u32, rows / 2);

        for row in 1..=rows {
            let expected = if row <= rows / 2 { pricing.front_price } else { pricing.back_price };
            prop_assert_eq!(pricing.price(layout, row), expected);
        }
    }

    /// Property: current income never exceeds total income
    #[test]
    fn prop_income_bounded_by_total(
        layout in layout_strategy(),
        selections in prop::collection::vec(selection_strategy(), 0..60),
    ) {
        let pricing = PricingPolicy::default();
        let mut grid = SeatGrid::new(layout);

        for (row, seat) in selections {
            let _ = reserve(&mut grid, &pricing, row, seat);
            prop_assert!(current_income(&grid, &pricing) <= total_income(layout, &pricing));
        }
    }

    /// Property: a successful reservation is never repeatable
    #[test]
    fn prop_rebooking_fails(layout in layout_strategy(), (row, seat) in selection_strategy()) {
        let pricing = PricingPolicy::default();
        let mut grid = SeatGrid::new(layout);

        if reserve(&mut grid, &pricing, row, seat).is_ok() {
            prop_assert_eq!(
                reserve(&mut grid, &pricing, row, seat),
                Err(ReservationError::AlreadyBooked)
            );
        }
    }

    /// Property: failures leave the grid untouched; successes book exactly one seat
    #[test]
    fn prop_single_mutation(
        layout in layout_strategy(),
        selections in prop::collection::vec(selection_strategy(), 1..40),
    ) {
        let pricing = PricingPolicy::default();
        let mut grid = SeatGrid::new(layout);

        for (row, seat) in selections {
            let before = grid.clone();
            match reserve(&mut grid, &pricing, row, seat) {
                Ok(booking) => {
                    prop_assert_eq!(grid.booked_count(), before.booked_count() + 1);
                    prop_assert_eq!(before.state(booking.seat), Some(SeatState::Available));
                    prop_assert_eq!(grid.state(booking.seat), Some(SeatState::Booked));
                    prop_assert_eq!(booking.price, pricing.price(layout, booking.seat.row));
                },
                Err(_) => {
                    prop_assert_eq!(&grid, &before);
                },
            }
        }
    }

    /// Property: selections outside the ceiling are always invalid input
    #[test]
    fn prop_ceiling_rejects(layout in layout_strategy(), row in 10i64..100, seat in -5i64..100) {
        let pricing = PricingPolicy::default();
        let mut grid = SeatGrid::new(layout);

        prop_assert_eq!(reserve(&mut grid, &pricing, row, seat), Err(ReservationError::InvalidInput));
        prop_assert_eq!(reserve(&mut grid, &pricing, seat, row), Err(ReservationError::InvalidInput));
        prop_assert_eq!(grid.booked_count(), 0);
    }

    /// Property: statistics are stable between reservations
    #[test]
    fn prop_statistics_idempotent(
        layout in layout_strategy(),
        selections in prop::collection::vec(selection_strategy(), 0..30),
    ) {
        let pricing = PricingPolicy::default();
        let mut grid = SeatGrid::new(layout);
        for (row, seat) in selections {
            let _ = reserve(&mut grid, &pricing, row, seat);
        }

        let first = Statistics::collect(&grid, &pricing);
        let second = Statistics::collect(&grid, &pricing);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.purchased, grid.booked_count());
        prop_assert!(first.percentage >= 0.0 && first.percentage <= 100.0);
    }
}

#[test]
fn every_selectable_seat_in_a_nine_by_nine_room_books_once() {
    let layout = Layout::new(9, 9).unwrap();
    let pricing = PricingPolicy::default();
    let mut grid = SeatGrid::new(layout);

    for row in 1..=SELECTION_CEILING {
        for seat in 1..=SELECTION_CEILING {
            assert!(reserve(&mut grid, &pricing, row, seat).is_ok());
        }
    }

    assert_eq!(grid.booked_count(), 81);
    assert_eq!(current_income(&grid, &pricing), total_income(layout, &pricing));
    assert_eq!(grid.booked_seats().next(), Some(Seat::new(1, 1)));
}

#[test]
fn seats_beyond_ceiling_stay_available() {
    let layout = Layout::new(10, 10).unwrap();
    let pricing = PricingPolicy::default();
    let mut grid = SeatGrid::new(layout);

    for row in 1..=10 {
        for seat in 1..=10 {
            let _ = reserve(&mut grid, &pricing, row, seat);
        }
    }

    assert_eq!(grid.booked_count(), 81);
    assert_eq!(grid.state(Seat::new(10, 10)), Some(SeatState::Available));
    assert_eq!(grid.state(Seat::new(1, 10)), Some(SeatState::Available));
}
