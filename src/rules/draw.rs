//! Board-full detection for connect four.

use crate::types::{Board, COLS, ROWS};
use tracing::instrument;

/// Checks whether every column is full.
///
/// Pieces stack from row 0 without gaps, so a column is full exactly when
/// its topmost cell is occupied; scanning the top row suffices.
#[instrument(skip(board))]
pub fn is_board_full(board: &Board) -> bool {
    (0..COLS).all(|col| {
        board
            .get(ROWS - 1, col)
            .is_some_and(|cell| !cell.is_empty())
    })
}
