//! Invariant checking for deterministic session testing.
//!
//! Invariants are properties that must always hold during a session.
//! Unlike example-based tests that check specific scenarios, invariants
//! verify behavioral properties across all possible execution paths.
//!
//! # Architecture
//!
//! The invariant system records observable App state into a
//! [`SessionSnapshot`] after every step, then runs registered [`Invariant`]
//! checks against the whole history.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let mut session = SessionSnapshot::empty();
//! session.record(runtime.app());
//! registry.check_all(&session)?;
//! ```

mod checks;
mod snapshot;

pub use checks::{
    BookingsNeverReleased, BookingsWithinLayout, IncomeWithinCapacity, LayoutFixed,
    StatisticsMatchGrid,
};
pub use snapshot::{SessionSnapshot, StateSnapshot};

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against a session history.
///
/// Invariants are behavioral properties that must always hold.
/// They capture WHAT must be true, not specific test scenarios.
pub trait Invariant: Send + Sync {
    /// Invariant name for error reporting.
    fn name(&self) -> &'static str;

    /// Check the invariant against the recorded history.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing what went wrong.
    fn check(&self, state: &SessionSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
///
/// Collects multiple invariants and runs them all against a session.
/// Use [`InvariantRegistry::standard()`] for the common session invariants.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the standard session invariants.
    ///
    /// Includes:
    /// - [`LayoutFixed`]: dimensions never change after setup
    /// - [`BookingsNeverReleased`]: booked seats stay booked
    /// - [`BookingsWithinLayout`]: booked seats lie inside the grid and ceiling
    /// - [`IncomeWithinCapacity`]: current income never exceeds total income
    /// - [`StatisticsMatchGrid`]: statistics agree with the booked seats
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(LayoutFixed);
        registry.add(BookingsNeverReleased);
        registry.add(BookingsWithinLayout);
        registry.add(IncomeWithinCapacity);
        registry.add(StatisticsMatchGrid);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given history.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, state: &SessionSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
