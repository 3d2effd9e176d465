//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules know nothing about
//! history; the game state composes them.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_stalemate};
pub use win::{LINES, WinningLine, completed_lines, detect_winner};
