//! Keyboard mapping: cursor movement and key commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rewind_tictactoe::Position;

use super::app::Focus;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the game.
    Quit,
    /// Play directly at a cell (digit keys).
    Play(Position),
    /// Play at the board cursor.
    PlayAtCursor,
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Swap focus between board and move list.
    SwitchFocus,
    /// Move list selection up.
    SelectPrevious,
    /// Move list selection down.
    SelectNext,
    /// Jump to the selected move list entry.
    ActivateSelected,
    /// Flip the move list order.
    ToggleSort,
    /// Nothing bound.
    Ignore,
}

/// Maps a key press to a command for the focused pane.
pub fn command_for(key: KeyEvent, focus: Focus) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    match (key.code, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Command::Quit,
        (KeyCode::Tab | KeyCode::BackTab, _) => Command::SwitchFocus,
        (KeyCode::Char('s'), _) => Command::ToggleSort,
        (KeyCode::Char(c @ '1'..='9'), _) => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Command::Ignore, Command::Play),

        (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right, Focus::Board) => {
            Command::MoveCursor(key.code)
        }
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Command::PlayAtCursor,

        (KeyCode::Up, Focus::MoveList) => Command::SelectPrevious,
        (KeyCode::Down, Focus::MoveList) => Command::SelectNext,
        (KeyCode::Enter | KeyCode::Char(' '), Focus::MoveList) => Command::ActivateSelected,

        _ => Command::Ignore,
    }
}

/// Moves the cursor one cell in the arrow key's direction, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}
