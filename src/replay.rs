//! Headless replay: play a move sequence and report the derived views.

use rewind_tictactoe::{
    Board, GameState, LocationSource, MoveError, MoveListEntry, Position, SortOrder, move_list,
};
use serde::Serialize;
use tracing::{debug, instrument};

/// Everything the UI would show for a state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// The board at the current move.
    pub board: Board,
    /// Status line text.
    pub status: String,
    /// Current history index.
    pub current_move: usize,
    /// Number of snapshots, including the empty start.
    pub history_len: usize,
    /// Winning cell indices on the current board.
    pub winning_line: Option<[usize; 3]>,
    /// Move list order.
    pub sort_order: SortOrder,
    /// Move list entries in display order, rendered to text.
    pub moves: Vec<String>,
}

impl ReplayReport {
    /// Builds the report for `state`.
    pub fn new(state: &GameState, source: LocationSource) -> Self {
        Self {
            board: *state.current_board(),
            status: state.status_text(),
            current_move: state.current_move(),
            history_len: state.history().len(),
            winning_line: state.winner().map(|w| w.indices()),
            sort_order: state.sort_order(),
            moves: move_list(state, source)
                .iter()
                .map(MoveListEntry::text)
                .collect(),
        }
    }

    /// Plain-text rendering: board, status, sort button and move list.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.board.display());
        out.push_str("\n\n");
        out.push_str(&self.status);
        out.push_str(&format!("\nSort Moves: {}\n", self.sort_order.label()));
        for line in &self.moves {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Plays `moves` from a fresh game, then optionally jumps.
///
/// # Errors
///
/// Returns the first rejected move or an out-of-range jump.
#[instrument]
pub fn replay(moves: &[Position], jump: Option<usize>, sort_order: SortOrder) -> Result<GameState, MoveError> {
    let mut state = GameState::replay(moves)?;
    if state.sort_order() != sort_order {
        state = state.toggle_sort_order();
    }
    if let Some(target) = jump {
        state = state.jump_to(target)?;
    }
    debug!(current_move = state.current_move(), history_len = state.history().len(), "Replay finished");
    Ok(state)
}
