//! Single-step history invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: History starts empty and each step fills one empty cell.
pub struct SingleStepHistory;

impl SingleStepHistory {
    /// Checks the invariant on a raw snapshot sequence.
    pub fn holds_for(history: &[Board]) -> bool {
        match history.first() {
            Some(first) if *first == Board::new() => history
                .windows(2)
                .all(|pair| Board::changed_cell(&pair[0], &pair[1]).is_some()),
            _ => false,
        }
    }
}

impl Invariant<GameState> for SingleStepHistory {
    fn holds(state: &GameState) -> bool {
        Self::holds_for(state.history())
    }

    fn description() -> &'static str {
        "History starts empty and each snapshot fills exactly one empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_legal_history_holds() {
        let empty = Board::new();
        let one = empty.with_mark(Position::Center, Player::X);
        let two = one.with_mark(Position::TopLeft, Player::O);
        assert!(SingleStepHistory::holds_for(&[empty, one, two]));
    }

    #[test]
    fn test_skipped_step_violates() {
        let empty = Board::new();
        let two = empty
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        assert!(!SingleStepHistory::holds_for(&[empty, two]));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let empty = Board::new();
        assert!(!SingleStepHistory::holds_for(&[empty, empty]));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let one = Board::new().with_mark(Position::Center, Player::X);
        assert!(!SingleStepHistory::holds_for(&[one]));
        assert!(!SingleStepHistory::holds_for(&[]));
    }
}
