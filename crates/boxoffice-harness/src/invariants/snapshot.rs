//! Observable state extracted from the App for invariant checking.

use std::collections::BTreeSet;

use boxoffice_app::App;
use boxoffice_core::{Layout, PricingPolicy, Seat, Statistics};

/// State of the App at one point in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    /// Auditorium dimensions. `None` before setup completes.
    pub layout: Option<Layout>,
    /// Booked seats.
    pub booked: BTreeSet<Seat>,
    /// Reported statistics. `None` before setup completes.
    pub statistics: Option<Statistics>,
    /// Prices in effect.
    pub pricing: PricingPolicy,
}

impl StateSnapshot {
    /// Extract observable state from the App.
    pub fn from_app(app: &App) -> Self {
        Self {
            layout: app.grid().map(boxoffice_core::SeatGrid::layout),
            booked: app.grid().map(|grid| grid.booked_seats().collect()).unwrap_or_default(),
            statistics: app.statistics(),
            pricing: *app.pricing(),
        }
    }
}

/// Ordered history of snapshots taken during one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    /// Snapshots, oldest first.
    pub history: Vec<StateSnapshot>,
}

impl SessionSnapshot {
    /// Empty history.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append the App's current state.
    pub fn record(&mut self, app: &App) {
        self.history.push(StateSnapshot::from_app(app));
    }

    /// Most recent snapshot. `None` if nothing recorded.
    pub fn latest(&self) -> Option<&StateSnapshot> {
        self.history.last()
    }
}
