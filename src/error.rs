//! Error types for the board engine.

use derive_more::{Display, Error};

/// Errors surfaced by the board engine.
///
/// All failures are synchronous and reported at the point of the invalid
/// call; a failed operation leaves the game state unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A real player identity was required but the empty occupant was given.
    #[display("a player is required, the empty occupant is not one")]
    InvalidPlayer,

    /// A row or column index fell outside the grid, or a drop targeted a
    /// column whose topmost cell is already occupied.
    #[display("row or column index out of range")]
    OutOfRange,
}
