//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples in priority order.
///
/// Rows first, then columns, then the two diagonals. When a board holds more
/// than one complete line, the earliest one here is the one reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the player holding it and its three positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// Player owning all three cells.
    pub player: Player,
    /// The triple, in `LINES` order.
    pub line: [Position; 3],
}

impl WinningLine {
    /// Board indices of the triple.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Whether `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    let cell = board.get(a);
    if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
        cell.mark()
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first complete line in `LINES` order, or `None`.
#[instrument]
pub fn detect_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        line_owner(board, *line).map(|player| WinningLine {
            player,
            line: *line,
        })
    })
}

/// Every complete line on the board, in `LINES` order.
#[instrument]
pub fn completed_lines(board: &Board) -> Vec<WinningLine> {
    LINES
        .iter()
        .filter_map(|line| {
            line_owner(board, *line).map(|player| WinningLine {
                player,
                line: *line,
            })
        })
        .collect()
}
