//! The current move always points into history.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_move < history.len()`.
pub struct CurrentInRange;

impl Invariant<GameState> for CurrentInRange {
    fn holds(state: &GameState) -> bool {
        state.current_move() < state.history().len()
    }

    fn description() -> &'static str {
        "Current move points at an existing snapshot"
    }
}
