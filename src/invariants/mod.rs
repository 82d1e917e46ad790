//! First-class invariants for the connect four board.
//!
//! Invariants are logical properties that must hold for every board the
//! engine can reach. They are testable independently and serve as
//! documentation of the engine's guarantees.

mod balance;
mod gravity;

pub use balance::PieceBalanceInvariant;
pub use gravity::GravityInvariant;

use crate::types::Board;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds, or the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (GravityInvariant, PieceBalanceInvariant);

/// Asserts that all board invariants hold (debug builds only).
pub(crate) fn assert_invariants(board: &Board) {
    debug_assert!(
        GravityInvariant::holds(board),
        "gravity invariant violated: {}",
        GravityInvariant::description()
    );
    debug_assert!(
        PieceBalanceInvariant::holds(board),
        "balance invariant violated: {}",
        PieceBalanceInvariant::description()
    );
}
