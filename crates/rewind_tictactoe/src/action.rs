//! First-class action types for the game.
//!
//! Every input the game accepts is an [`Action`]. Actions are values: they
//! can be logged, replayed and validated independently of applying them.

use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// An input to the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Place the current player's mark.
    #[display("play {}", _0)]
    PlayMove(Position),
    /// Move the current pointer to an earlier (or later) snapshot.
    #[display("jump to move #{}", _0)]
    JumpTo(usize),
    /// Flip the move list display order.
    #[display("toggle sort order")]
    ToggleSortOrder,
}

/// Why an action was rejected.
///
/// A rejected action never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    OccupiedCell(Position),

    /// The current board already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// The requested history entry does not exist.
    #[display("No move #{} in a history of {} entries", requested, len)]
    NoSuchMove {
        /// Requested move index.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::OccupiedCell(Position::Center).to_string(),
            "Center is already occupied"
        );
        assert_eq!(
            MoveError::GameOver(Player::X).to_string(),
            "Game is already over: X won"
        );
        assert_eq!(
            MoveError::NoSuchMove { requested: 4, len: 2 }.to_string(),
            "No move #4 in a history of 2 entries"
        );
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::PlayMove(Position::TopLeft).to_string(), "play Top-left");
        assert_eq!(Action::JumpTo(3).to_string(), "jump to move #3");
    }
}
