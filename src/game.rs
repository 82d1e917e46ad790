//! The board engine: grid plus turn state, drops, and derived status.

use crate::error::GameError;
use crate::invariants;
use crate::rules;
use crate::types::{Board, Cell, Player, ROWS};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Connect four game engine.
///
/// Owns the grid and the turn-holder. Win and game-over status are
/// recomputed from the grid on every query rather than cached; the grid is
/// small, so derived status removes any risk of a stale cache at
/// negligible cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Game {
    /// Creates a new game with an empty grid; `first_player` moves first.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first_player,
        }
    }

    /// Like [`Game::new`], but takes the starting player in cell-occupant
    /// form.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayer`] if `first` is [`Cell::Empty`].
    #[instrument]
    pub fn try_new(first: Cell) -> Result<Self, GameError> {
        Ok(Self::new(Player::try_from(first)?))
    }

    /// Clears every cell and hands the turn to `first_player`.
    ///
    /// Mutates in place; the result is indistinguishable from a freshly
    /// constructed game.
    #[instrument(skip(self))]
    pub fn reset(&mut self, first_player: Player) {
        self.board.clear();
        self.to_move = first_player;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Occupant of the cell at `row` (0 = bottom) and `col` (0 = leftmost).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if either index is outside the
    /// grid.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.board.get(row, col).ok_or(GameError::OutOfRange)
    }

    /// The player whose move is next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// True iff a winner exists or the board is full.
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || rules::is_board_full(&self.board)
    }

    /// The winning player, or `None` while no win line exists (including
    /// on a full, drawn board).
    ///
    /// The win scan only decides whether a four-in-a-row exists; the
    /// winner is the player who is *not* on turn, because the turn has
    /// already advanced past the winning drop by the time this can be
    /// queried. The inference holds as long as the caller stops dropping
    /// once [`Game::is_over`] reports true; the engine does not police the
    /// terminal state.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<Player> {
        rules::has_win_line(&self.board).then(|| self.to_move.opponent())
    }

    /// Drops the turn-holder's piece into `column` and advances the turn.
    ///
    /// The piece lands on the lowest empty row of the column. Validation
    /// happens before any mutation: a failed drop leaves both grid and
    /// turn untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if `column` is outside the grid
    /// or already full.
    #[instrument(skip(self))]
    pub fn drop_into(&mut self, column: usize) -> Result<(), GameError> {
        let row = self.board.landing_row(column).ok_or(GameError::OutOfRange)?;

        let player = self.to_move;
        self.board.set(row, column, Cell::Occupied(player));
        self.to_move = player.opponent();
        debug!(?player, row, column, "piece dropped");

        invariants::assert_invariants(&self.board);
        Ok(())
    }
}

impl fmt::Display for Game {
    /// Renders the turn header and the grid from the top row down:
    ///
    /// ```text
    /// Player: RED
    /// | .  .  .  .  .  .  . |
    /// ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player: {}", self.to_move.to_string().to_uppercase())?;
        for row in (0..ROWS).rev() {
            write!(f, "|")?;
            for &cell in &self.board.cells()[row] {
                write!(f, " {} ", cell.glyph())?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
