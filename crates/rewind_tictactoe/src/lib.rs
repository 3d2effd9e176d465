//! Pure tic-tac-toe game logic with a rewindable move history.
//!
//! # Architecture
//!
//! - **Types**: [`Board`] snapshots of [`Cell`]s, addressed by [`Position`]
//! - **Rules**: pure win and stalemate detection ([`rules`])
//! - **State**: [`GameState`], the history of snapshots plus a current move
//!   that can travel back and forth
//! - **Move list**: stateless entries derived from a state ([`move_list()`])
//! - **Invariants**: history properties checked after every transition
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Position};
//!
//! let state = GameState::new()
//!     .play_move(Position::TopLeft)?
//!     .play_move(Position::Center)?;
//! assert_eq!(state.status_text(), "Next player: X");
//!
//! let rewound = state.jump_to(0)?;
//! assert_eq!(rewound.history().len(), 3);
//! # Ok::<(), rewind_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod sort;
mod state;
mod status;
mod types;

pub use action::{Action, MoveError};
pub use move_list::{LocationSource, MoveListEntry, move_list};
pub use position::Position;
pub use rules::{WinningLine, detect_winner};
pub use sort::SortOrder;
pub use state::GameState;
pub use status::Status;
pub use types::{Board, Cell, Player};
