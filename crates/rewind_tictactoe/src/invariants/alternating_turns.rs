//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{Board, Cell, GameState, Player};

/// Invariant: step `i` of the history places X when `i` is even, O when odd.
pub struct AlternatingTurns;

impl AlternatingTurns {
    /// Checks the invariant on a raw snapshot sequence.
    pub fn holds_for(history: &[Board]) -> bool {
        history.windows(2).enumerate().all(|(i, pair)| {
            match Board::changed_cell(&pair[0], &pair[1]) {
                Some(pos) => pair[1].get(pos) == Cell::Occupied(Player::for_move(i)),
                None => false,
            }
        })
    }
}

impl Invariant<GameState> for AlternatingTurns {
    fn holds(state: &GameState) -> bool {
        Self::holds_for(state.history())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_alternating_sequence_holds() {
        let empty = Board::new();
        let one = empty.with_mark(Position::TopLeft, Player::X);
        let two = one.with_mark(Position::Center, Player::O);
        let three = two.with_mark(Position::TopRight, Player::X);
        assert!(AlternatingTurns::holds_for(&[empty, one, two, three]));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let empty = Board::new();
        let one = empty.with_mark(Position::TopLeft, Player::X);
        let two = one.with_mark(Position::Center, Player::X);
        assert!(!AlternatingTurns::holds_for(&[empty, one, two]));
    }

    #[test]
    fn test_o_first_violates() {
        let empty = Board::new();
        let one = empty.with_mark(Position::TopLeft, Player::O);
        assert!(!AlternatingTurns::holds_for(&[empty, one]));
    }
}
