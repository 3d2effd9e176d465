//! Move list entries derived from a game state.
//!
//! Nothing here holds state. Entries are rebuilt from the history on every
//! render; numbering always follows the history, only the emitted order
//! depends on [`SortOrder`].

use crate::{Board, GameState, SortOrder};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Where an entry's "(Row: r, Col: c)" suffix comes from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "kebab-case")]
pub enum LocationSource {
    /// Derived from the move number: row `m / 3 + 1`, column `m % 3 + 1`.
    ///
    /// This does not track the cell actually played; it is kept so the list
    /// reads the same as the classic browser version of the game.
    #[default]
    MoveNumber,
    /// The cell that changed between the previous snapshot and this one.
    PlayedCell,
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveListEntry {
    /// History index this entry jumps to.
    pub move_number: usize,
    /// Whether this entry is the move currently shown.
    pub is_current: bool,
    /// One-based (row, column), absent for the game start.
    pub location: Option<(usize, usize)>,
}

impl MoveListEntry {
    /// Description without the location, e.g. "Go to move #3".
    pub fn description(&self) -> String {
        if self.move_number == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.move_number)
        }
    }

    /// Full text shown in the list.
    ///
    /// The current move reads "You're on move #m" and is not clickable.
    pub fn text(&self) -> String {
        if self.is_current {
            return format!("You're on move #{}", self.move_number);
        }
        match self.location {
            Some((row, col)) => format!("{} (Row: {}, Col: {})", self.description(), row, col),
            None => self.description(),
        }
    }

    /// Whether selecting this entry does anything.
    pub fn is_clickable(&self) -> bool {
        !self.is_current
    }
}

fn location(history: &[Board], move_number: usize, source: LocationSource) -> Option<(usize, usize)> {
    if move_number == 0 {
        return None;
    }
    match source {
        LocationSource::MoveNumber => Some((move_number / 3 + 1, move_number % 3 + 1)),
        LocationSource::PlayedCell => {
            Board::changed_cell(&history[move_number - 1], &history[move_number])
                .map(|pos| (pos.row() + 1, pos.col() + 1))
        }
    }
}

/// Builds the move list for `state` in its sort order.
#[instrument(skip(state), fields(history_len = state.history().len(), order = %state.sort_order()))]
pub fn move_list(state: &GameState, source: LocationSource) -> Vec<MoveListEntry> {
    let history = state.history();
    let mut entries: Vec<MoveListEntry> = (0..history.len())
        .map(|move_number| MoveListEntry {
            move_number,
            is_current: move_number == state.current_move(),
            location: location(history, move_number, source),
        })
        .collect();

    if state.sort_order() == SortOrder::Descending {
        entries.reverse();
    }
    entries
}
