//! Application state and logic.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::layout::Rect;
use rewind_tictactoe::{Action, GameState, LocationSource, MoveListEntry, Position, SortOrder, move_list};
use tracing::{debug, info, instrument};

use super::input::{Command, command_for, move_cursor};
use super::ui::{self, Target};
use crate::RewindConfig;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move list selection.
    MoveList,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::MoveList,
            Self::MoveList => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    state: GameState,
    location_source: LocationSource,
    cursor: Position,
    focus: Focus,
    /// Display index of the highlighted move list row.
    selected: usize,
    /// Message for the last rejected input, cleared by the next accepted one.
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &RewindConfig) -> Self {
        Self {
            state: GameState::with_sort_order(*config.sort_order()),
            location_source: *config.location_source(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// Move list rows in display order.
    pub fn entries(&self) -> Vec<MoveListEntry> {
        move_list(&self.state, self.location_source)
    }

    /// Applies an action to the game state.
    ///
    /// A rejected action leaves the state alone and sets the notice.
    #[instrument(skip(self), fields(current_move = self.state.current_move()))]
    pub fn dispatch(&mut self, action: Action) {
        match self.state.apply(&action) {
            Ok(next) => {
                info!(%action, status = %next.status(), "Action applied");
                self.state = next;
                self.notice = None;
                self.selected = self.current_entry_index();
            }
            Err(e) => {
                debug!(%action, error = %e, "Action rejected");
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Display index of the entry for the current move.
    fn current_entry_index(&self) -> usize {
        let last = self.state.history().len() - 1;
        match self.state.sort_order() {
            SortOrder::Ascending => self.state.current_move(),
            SortOrder::Descending => last - self.state.current_move(),
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match command_for(key, self.focus) {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::Play(pos) => {
                self.cursor = pos;
                self.dispatch(Action::PlayMove(pos));
            }
            Command::PlayAtCursor => self.dispatch(Action::PlayMove(self.cursor)),
            Command::MoveCursor(code) => self.cursor = move_cursor(self.cursor, code),
            Command::SwitchFocus => {
                self.focus = self.focus.toggle();
                self.selected = self.current_entry_index();
            }
            Command::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            Command::SelectNext => {
                let last = self.state.history().len() - 1;
                self.selected = (self.selected + 1).min(last);
            }
            Command::ActivateSelected => self.activate_entry(self.selected),
            Command::ToggleSort => self.dispatch(Action::ToggleSortOrder),
            Command::Ignore => {}
        }
    }

    /// Handles a mouse event; only left clicks do anything.
    ///
    /// `area` is the full terminal area the last frame was drawn into.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let regions = ui::layout(area);
        let entries = self.state.history().len();
        match ui::hit_test(&regions, mouse.column, mouse.row, entries) {
            Some(Target::Cell(pos)) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.dispatch(Action::PlayMove(pos));
            }
            Some(Target::MoveEntry(index)) => {
                self.focus = Focus::MoveList;
                self.activate_entry(index);
            }
            Some(Target::SortButton) => self.dispatch(Action::ToggleSortOrder),
            None => {}
        }
    }

    /// Jumps to the entry at display `index`; the current entry is inert.
    fn activate_entry(&mut self, index: usize) {
        let Some(entry) = self.entries().into_iter().nth(index) else {
            return;
        };
        self.selected = index;
        if entry.is_clickable() {
            self.dispatch(Action::JumpTo(entry.move_number));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_digit_keys_play() {
        let mut app = App::new(&RewindConfig::default());
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.state().history().len(), 2);
        assert_eq!(app.state().status_text(), "Next player: O");
        assert_eq!(*app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_rejection_sets_notice_then_clears() {
        let mut app = App::new(&RewindConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().history().len(), 2);
        assert_eq!(app.notice().as_deref(), Some("Center is already occupied"));

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.notice(), &None);
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::new(&RewindConfig::default());
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(*app.focus(), Focus::MoveList);
        assert_eq!(*app.selected(), 2);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().current_move(), 0);
        assert_eq!(app.state().history().len(), 3);
    }

    #[test]
    fn test_selection_follows_current_after_sort_toggle() {
        let mut app = App::new(&RewindConfig::default());
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state().sort_order(), SortOrder::Descending);
        assert_eq!(*app.selected(), 0);
        assert_eq!(app.entries()[0].text(), "You're on move #2");
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(&RewindConfig::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(*app.should_quit());
    }
}
