//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use boxoffice_core::SELECTION_CEILING;

use super::{Invariant, InvariantResult, SessionSnapshot, Violation};

/// Layout never changes once configured.
pub struct LayoutFixed;

impl Invariant for LayoutFixed {
    fn name(&self) -> &'static str {
        "layout_fixed"
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        let mut configured = None;
        for (step, snapshot) in state.history.iter().enumerate() {
            match (configured, snapshot.layout) {
                (None, layout) => configured = layout,
                (Some(expected), actual) if actual != Some(expected) => {
                    return Err(Violation {
                        invariant: self.name(),
                        message: format!("step {step}: layout {actual:?}, expected {expected:?}"),
                    });
                },
                _ => {},
            }
        }
        Ok(())
    }
}

/// A booked seat stays booked for the rest of the session.
pub struct BookingsNeverReleased;

impl Invariant for BookingsNeverReleased {
    fn name(&self) -> &'static str {
        "bookings_never_released"
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        for (step, window) in state.history.windows(2).enumerate() {
            let [before, after] = window else {
                continue;
            };
            if let Some(released) = before.booked.difference(&after.booked).next() {
                return Err(Violation {
                    invariant: self.name(),
                    message: format!("step {}: {released} was released", step + 1),
                });
            }
        }
        Ok(())
    }
}

/// Every booked seat lies inside the layout and the selection ceiling.
pub struct BookingsWithinLayout;

impl Invariant for BookingsWithinLayout {
    fn name(&self) -> &'static str {
        "bookings_within_layout"
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        let ceiling = SELECTION_CEILING as u32;
        for (step, snapshot) in state.history.iter().enumerate() {
            let Some(layout) = snapshot.layout else {
                if let Some(seat) = snapshot.booked.first() {
                    return Err(Violation {
                        invariant: self.name(),
                        message: format!("step {step}: {seat} booked before setup"),
                    });
                }
                continue;
            };

            let outside = snapshot.booked.iter().find(|seat| {
                !(1..=layout.rows().min(ceiling)).contains(&seat.row)
                    || !(1..=layout.seats_per_row().min(ceiling)).contains(&seat.seat)
            });
            if let Some(seat) = outside {
                return Err(Violation {
                    invariant: self.name(),
                    message: format!("step {step}: {seat} outside {layout:?}"),
                });
            }
        }
        Ok(())
    }
}

/// Current income never exceeds the income of a full house.
pub struct IncomeWithinCapacity;

impl Invariant for IncomeWithinCapacity {
    fn name(&self) -> &'static str {
        "income_within_capacity"
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        for (step, snapshot) in state.history.iter().enumerate() {
            if let Some(stats) = snapshot.statistics
                && stats.current_income > stats.total_income
            {
                return Err(Violation {
                    invariant: self.name(),
                    message: format!(
                        "step {step}: current income {} above total {}",
                        stats.current_income, stats.total_income
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Reported statistics agree with the booked seats.
pub struct StatisticsMatchGrid;

impl Invariant for StatisticsMatchGrid {
    fn name(&self) -> &'static str {
        "statistics_match_grid"
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        for (step, snapshot) in state.history.iter().enumerate() {
            let (Some(layout), Some(stats)) = (snapshot.layout, snapshot.statistics) else {
                continue;
            };

            let purchased = snapshot.booked.len() as u64;
            let income: u64 = snapshot
                .booked
                .iter()
                .map(|seat| u64::from(snapshot.pricing.price(layout, seat.row)))
                .sum();
            let percentage = purchased as f64 / layout.capacity() as f64 * 100.0;

            let consistent = stats.purchased == purchased
                && stats.current_income == income
                && (stats.percentage - percentage).abs() < 1e-9;
            if !consistent {
                return Err(Violation {
                    invariant: self.name(),
                    message: format!(
                        "step {step}: reported {stats:?}, grid has {purchased} seats worth {income}"
                    ),
                });
            }
        }
        Ok(())
    }
}
