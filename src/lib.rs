//! Pure connect four game logic.
//!
//! Models the classic two-player connection game on a 6x7 vertical grid:
//! pieces drop into a column and land on the lowest free cell, and four
//! consecutive same-owned cells along a row, column, or diagonal win.
//! There is no opponent, no UI, and no I/O here, just the board engine.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Cell`], and [`Board`] model the grid
//! - **Rules**: win and board-full detection as pure functions of the grid ([`rules`])
//! - **Engine**: [`Game`] owns the grid and turn state and applies drops
//! - **Invariants**: first-class board properties, asserted after every drop ([`invariants`])
//!
//! # Example
//!
//! ```
//! use strictly_connectfour::{Game, Player};
//!
//! let mut game = Game::new(Player::Red);
//! game.drop_into(3)?;
//! assert_eq!(game.to_move(), Player::Yellow);
//! assert!(!game.is_over());
//! # Ok::<(), strictly_connectfour::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use error::GameError;
pub use game::Game;
pub use types::{Board, Cell, Player, COLS, ROWS, WIN_LENGTH};
