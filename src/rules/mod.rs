//! Game rules: win and board-full detection as pure functions of the grid.

mod draw;
mod win;

pub use draw::is_board_full;
pub use win::has_win_line;
