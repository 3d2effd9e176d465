//! Rewindable game state.
//!
//! [`GameState`] is an immutable value: every transition takes `&self` and
//! returns a new state, so a rejected action cannot leave a half-applied
//! change behind. The history is a sequence of board snapshots; the current
//! move points into it and can travel back and forth without touching it.

use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::rules::{WinningLine, detect_winner};
use crate::{Action, Board, MoveError, Player, Position, SortOrder, Status};
use serde::Serialize;
use tracing::{debug, instrument};

/// Full game state: move history, current move and move list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: Vec<Board>,
    current_move: usize,
    sort_order: SortOrder,
}

impl GameState {
    /// Creates a new game: a single empty board, X to move.
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game with the move list shown in `sort_order`.
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            sort_order,
        }
    }

    /// Plays `moves` in order from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Self::new(), |state, pos| state.play_move(*pos))
    }

    /// Every snapshot, index 0 being the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the snapshot currently shown.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Move list display order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The snapshot currently shown.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Whether the current move is the last one in history.
    pub fn is_latest(&self) -> bool {
        self.current_move + 1 == self.history.len()
    }

    /// Player whose turn it is on the current board.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// The winning line on the current board, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        detect_winner(self.current_board())
    }

    /// Status of the current board.
    pub fn status(&self) -> Status {
        Status::of(self.current_board(), self.next_player())
    }

    /// Status line text: "Winner: X", "Stalemate" or "Next player: O".
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Any snapshots after the current move are discarded before the new
    /// board is appended.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current board already has a winner.
    /// - [`MoveError::OccupiedCell`] if `pos` is taken.
    #[instrument(skip(self), fields(current_move = self.current_move, history_len = self.history.len()))]
    pub fn play_move(&self, pos: Position) -> Result<Self, MoveError> {
        let board = self.current_board();

        if let Some(win) = detect_winner(board) {
            debug!(winner = %win.player, "Rejecting move after game over");
            return Err(MoveError::GameOver(win.player));
        }

        if !board.is_empty(pos) {
            debug!(%pos, "Rejecting move on occupied cell");
            return Err(MoveError::OccupiedCell(pos));
        }

        let player = self.next_player();
        let next_board = board.with_mark(pos, player);

        let mut history = self.history[..=self.current_move].to_vec();
        history.push(next_board);
        let next = Self {
            current_move: history.len() - 1,
            history,
            sort_order: self.sort_order,
        };

        debug_assert!(
            TimelineInvariants::check_all(&next).is_ok(),
            "play_move broke a history invariant"
        );
        debug!(%player, %pos, current_move = next.current_move, "Move applied");
        Ok(next)
    }

    /// Points the current move at history entry `move_index`.
    ///
    /// History is left untouched.
    ///
    /// # Errors
    ///
    /// [`MoveError::NoSuchMove`] if `move_index` is past the end of history.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn jump_to(&self, move_index: usize) -> Result<Self, MoveError> {
        if move_index >= self.history.len() {
            return Err(MoveError::NoSuchMove {
                requested: move_index,
                len: self.history.len(),
            });
        }

        Ok(Self {
            history: self.history.clone(),
            current_move: move_index,
            sort_order: self.sort_order,
        })
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&self) -> Self {
        Self {
            history: self.history.clone(),
            current_move: self.current_move,
            sort_order: self.sort_order.toggle(),
        }
    }

    /// Applies any [`Action`].
    ///
    /// # Errors
    ///
    /// Propagates the rejection of the underlying transition.
    #[instrument(skip(self))]
    pub fn apply(&self, action: &Action) -> Result<Self, MoveError> {
        match *action {
            Action::PlayMove(pos) => self.play_move(pos),
            Action::JumpTo(move_index) => self.jump_to(move_index),
            Action::ToggleSortOrder => Ok(self.toggle_sort_order()),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_move(), 0);
        assert_eq!(state.current_board(), &Board::new());
        assert_eq!(state.status_text(), "Next player: X");
        assert!(state.is_latest());
    }

    #[test]
    fn test_play_alternates_players() {
        let state = GameState::new().play_move(Position::Center).unwrap();
        assert_eq!(state.current_board().get(Position::Center), Cell::Occupied(Player::X));
        assert_eq!(state.next_player(), Player::O);

        let state = state.play_move(Position::TopLeft).unwrap();
        assert_eq!(state.current_board().get(Position::TopLeft), Cell::Occupied(Player::O));
        assert_eq!(state.next_player(), Player::X);
    }

    #[test]
    fn test_rejected_move_keeps_original() {
        let state = GameState::new().play_move(Position::Center).unwrap();
        let before = state.clone();
        assert_eq!(
            state.play_move(Position::Center),
            Err(MoveError::OccupiedCell(Position::Center))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_jump_out_of_range() {
        let state = GameState::new();
        assert_eq!(
            state.jump_to(1),
            Err(MoveError::NoSuchMove { requested: 1, len: 1 })
        );
    }

    #[test]
    fn test_jump_then_play_uses_parity_of_target() {
        let state = GameState::replay(&[Position::TopLeft, Position::Center, Position::TopRight])
            .unwrap()
            .jump_to(1)
            .unwrap();
        assert!(!state.is_latest());
        assert_eq!(state.next_player(), Player::O);

        let state = state.play_move(Position::BottomRight).unwrap();
        assert_eq!(state.history().len(), 3);
        assert_eq!(
            state.current_board().get(Position::BottomRight),
            Cell::Occupied(Player::O)
        );
        assert!(state.current_board().is_empty(Position::Center));
    }

    #[test]
    fn test_toggle_sort_leaves_history() {
        let state = GameState::replay(&[Position::TopLeft]).unwrap();
        let toggled = state.toggle_sort_order();
        assert_eq!(toggled.sort_order(), SortOrder::Descending);
        assert_eq!(toggled.history(), state.history());
        assert_eq!(toggled.current_move(), state.current_move());
    }

    #[test]
    fn test_apply_dispatches() {
        let state = GameState::new()
            .apply(&Action::PlayMove(Position::Center))
            .and_then(|s| s.apply(&Action::ToggleSortOrder))
            .and_then(|s| s.apply(&Action::JumpTo(0)))
            .unwrap();
        assert_eq!(state.current_move(), 0);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.sort_order(), SortOrder::Descending);
    }
}
