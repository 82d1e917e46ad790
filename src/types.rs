//! Core domain types for connect four.

use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// Number of rows on the board. Row 0 is the bottom, where pieces land.
pub const ROWS: usize = 6;

/// Number of columns on the board. Column 0 is the leftmost.
pub const COLS: usize = 7;

/// Number of consecutive same-owned cells that wins the game.
pub const WIN_LENGTH: usize = 4;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Player {
    /// The red player, rendered as `R`.
    Red,
    /// The yellow player, rendered as `Y`.
    Yellow,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's piece.
    Occupied(Player),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character glyph used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::Red) => 'R',
            Cell::Occupied(Player::Yellow) => 'Y',
        }
    }
}

impl TryFrom<Cell> for Player {
    type Error = GameError;

    /// Extracts the player from an occupied cell.
    ///
    /// The empty occupant is not a player; converting it fails with
    /// [`GameError::InvalidPlayer`].
    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        match cell {
            Cell::Occupied(player) => Ok(player),
            Cell::Empty => Err(GameError::InvalidPlayer),
        }
    }
}

/// 6x7 connect four board.
///
/// Rows are indexed bottom-up: row 0 is the gravity floor. Within any
/// column the occupied cells form a contiguous run starting at row 0.
/// Cell writes are crate-private so the run cannot be broken from outside;
/// the public surface is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `cells[row][col]`.
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Gets the cell at the given row and column, or `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns all cells, indexed `[row][col]` with row 0 at the bottom.
    pub fn cells(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Lowest empty row of the given column, scanning up from the floor.
    ///
    /// Returns `None` when the column is full or out of range.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).find(|&row| self.cells[row][col].is_empty())
    }

    /// Columns that can still accept a drop.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..COLS)
            .filter(|&col| self.landing_row(col).is_some())
            .collect()
    }

    /// Number of cells occupied by the given player.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count()
    }

    /// Writes a cell directly. Callers must target the landing row of the
    /// column, otherwise the gravity run breaks.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Resets every cell to empty.
    pub(crate) fn clear(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(ROWS, 0), None);
        assert_eq!(board.get(0, COLS), None);
        assert_eq!(board.get(ROWS, COLS), None);
    }

    #[test]
    fn test_landing_row_tracks_stack_height() {
        let mut board = Board::new();
        assert_eq!(board.landing_row(2), Some(0));

        board.set(0, 2, Cell::Occupied(Player::Red));
        assert_eq!(board.landing_row(2), Some(1));

        board.set(1, 2, Cell::Occupied(Player::Yellow));
        assert_eq!(board.landing_row(2), Some(2));
    }

    #[test]
    fn test_landing_row_full_column() {
        let mut board = Board::new();
        for row in 0..ROWS {
            board.set(row, 4, Cell::Occupied(Player::Red));
        }
        assert_eq!(board.landing_row(4), None);
    }

    #[test]
    fn test_landing_row_out_of_range_column() {
        let board = Board::new();
        assert_eq!(board.landing_row(COLS), None);
    }

    #[test]
    fn test_open_columns_filters_full() {
        let mut board = Board::new();
        for row in 0..ROWS {
            board.set(row, 0, Cell::Occupied(Player::Red));
        }
        let open = board.open_columns();
        assert_eq!(open, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_count_by_player() {
        let mut board = Board::new();
        board.set(0, 0, Cell::Occupied(Player::Red));
        board.set(0, 1, Cell::Occupied(Player::Yellow));
        board.set(1, 0, Cell::Occupied(Player::Red));

        assert_eq!(board.count(Player::Red), 2);
        assert_eq!(board.count(Player::Yellow), 1);
    }

    #[test]
    fn test_player_from_cell() {
        assert_eq!(
            Player::try_from(Cell::Occupied(Player::Yellow)),
            Ok(Player::Yellow)
        );
        assert_eq!(
            Player::try_from(Cell::Empty),
            Err(GameError::InvalidPlayer)
        );
    }

    #[test]
    fn test_player_display_is_lowercase() {
        assert_eq!(Player::Red.to_string(), "red");
        assert_eq!(Player::Yellow.to_string(), "yellow");
    }
}
