//! Revenue calculator.

use crate::{Layout, PricingPolicy, SeatGrid};

/// Income from every booked seat in the grid.
pub fn current_income(grid: &SeatGrid, pricing: &PricingPolicy) -> u64 {
    let layout = grid.layout();
    grid.rows()
        .zip(1..)
        .map(|(cells, row)| {
            let booked = cells.iter().filter(|state| state.is_booked()).count() as u64;
            booked * u64::from(pricing.price(layout, row))
        })
        .sum()
}

/// Income if every seat in the auditorium were sold.
pub fn total_income(layout: Layout, pricing: &PricingPolicy) -> u64 {
    let seats = u64::from(layout.seats_per_row());
    let front = u64::from(pricing.front_price);

    if pricing.is_small_room(layout) {
        return layout.capacity() * front;
    }

    let front_rows = u64::from(layout.front_rows());
    let back_rows = u64::from(layout.rows()) - front_rows;
    front_rows * seats * front + back_rows * seats * u64::from(pricing.back_price)
}
