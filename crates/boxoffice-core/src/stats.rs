//! Statistics reporter.

use crate::{PricingPolicy, SeatGrid, revenue};

/// Snapshot of sales for one auditorium.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Number of purchased tickets.
    pub purchased: u64,
    /// Share of seats sold, in percent. `0.0` for an empty auditorium.
    pub percentage: f64,
    /// Income from purchased tickets.
    pub current_income: u64,
    /// Income if every seat were sold.
    pub total_income: u64,
}

impl Statistics {
    /// Compute statistics for the current state of `grid`. Read-only.
    pub fn collect(grid: &SeatGrid, pricing: &PricingPolicy) -> Self {
        let purchased = grid.booked_count();
        Self {
            purchased,
            percentage: occupancy(purchased, grid.layout().capacity()),
            current_income: revenue::current_income(grid, pricing),
            total_income: revenue::total_income(grid.layout(), pricing),
        }
    }
}

/// Percentage of `capacity` covered by `purchased`.
fn occupancy(purchased: u64, capacity: u64) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    purchased as f64 / capacity as f64 * 100.0
}
