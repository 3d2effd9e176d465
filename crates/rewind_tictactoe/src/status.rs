//! Game status derived from a board snapshot.

use crate::rules::{detect_winner, is_full};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// What the status line reports for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player holds a complete line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Board is full and nobody won.
    #[display("Stalemate")]
    Stalemate,
    /// Game continues with this player to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Derives the status of `board` when `to_move` is next.
    pub fn of(board: &Board, to_move: Player) -> Self {
        if let Some(win) = detect_winner(board) {
            Status::Winner(win.player)
        } else if is_full(board) {
            Status::Stalemate
        } else {
            Status::NextPlayer(to_move)
        }
    }

    /// True for wins and stalemates.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}
