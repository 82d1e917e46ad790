//! Piece balance invariant: strict turn alternation bounds the counts.

use super::Invariant;
use crate::types::{Board, Player};

/// Invariant: the piece counts of the two players differ by at most one.
///
/// Every drop places exactly one piece and hands the turn over, so the
/// counts can never drift further apart.
pub struct PieceBalanceInvariant;

impl Invariant<Board> for PieceBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let red = board.count(Player::Red);
        let yellow = board.count(Player::Yellow);
        red.abs_diff(yellow) <= 1
    }

    fn description() -> &'static str {
        "piece counts of the two players differ by at most one"
    }
}
