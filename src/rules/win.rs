//! Win detection for connect four.

use crate::types::{Board, Cell, COLS, ROWS, WIN_LENGTH};
use tracing::instrument;

/// Scan directions as `(row, col)` steps: along a row, up a column,
/// rising diagonal, falling diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Checks whether any four-in-a-row of a single player exists.
///
/// Slides a [`WIN_LENGTH`] window from every cell along the four
/// directions and reports whether some window holds equal occupied cells.
/// The scan does not report which player owns the line; the engine infers
/// the winner from the turn-holder instead.
#[instrument(skip(board))]
pub fn has_win_line(board: &Board) -> bool {
    DIRECTIONS.iter().any(|&dir| direction_wins(board, dir))
}

fn direction_wins(board: &Board, (dr, dc): (isize, isize)) -> bool {
    for row in 0..ROWS {
        for col in 0..COLS {
            if window_wins(board, row, col, dr, dc) {
                return true;
            }
        }
    }
    false
}

/// A window wins when all [`WIN_LENGTH`] cells starting at `(row, col)`
/// along the direction are in range, equal, and occupied.
fn window_wins(board: &Board, row: usize, col: usize, dr: isize, dc: isize) -> bool {
    let Some(first @ Cell::Occupied(_)) = board.get(row, col) else {
        return false;
    };

    (1..WIN_LENGTH).all(|i| {
        let r = row as isize + dr * i as isize;
        let c = col as isize + dc * i as isize;
        r >= 0 && c >= 0 && board.get(r as usize, c as usize) == Some(first)
    })
}
