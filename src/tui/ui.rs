//! Stateless UI rendering for the game.
//!
//! [`layout`] is a pure function of the terminal area. Drawing and mouse
//! hit-testing both go through it, so a click always lands on what was drawn.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::{Cell, Player, Position};

use super::app::{App, Focus};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// The nine cells, in position order.
    pub cells: [Rect; 9],
    /// Horizontal separators between board rows.
    pub row_separators: [Rect; 2],
    /// Vertical separators, two per board row.
    pub col_separators: [Rect; 6],
    /// Bordered status box.
    pub status: Rect,
    /// One-line notice for rejected input.
    pub notice: Rect,
    /// Key help line.
    pub help: Rect,
    /// Bordered sort toggle button.
    pub sort_button: Rect,
    /// Bordered move list block.
    pub moves_block: Rect,
    /// Inside of the move list block: entry `i` is drawn on row `y + i`.
    pub moves: Rect,
}

/// What a screen coordinate points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// A move list row, by display index.
    MoveEntry(usize),
    /// The sort order button.
    SortButton,
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn inner(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, vert, _] = Layout::vertical([
        Constraint::Length((area.height.saturating_sub(height)) / 2),
        Constraint::Length(height),
        Constraint::Length((area.height.saturating_sub(height)) / 2),
    ])
    .areas(area);

    let [_, rect, _] = Layout::horizontal([
        Constraint::Length((area.width.saturating_sub(width)) / 2),
        Constraint::Length(width),
        Constraint::Length((area.width.saturating_sub(width)) / 2),
    ])
    .areas(vert);
    rect
}

/// Splits the terminal area into screen regions.
pub fn layout(area: Rect) -> ScreenLayout {
    let [title, body, status, notice, help] = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(BOARD_HEIGHT),
        Constraint::Length(3), // Status
        Constraint::Length(1), // Notice
        Constraint::Length(1), // Help
    ])
    .areas(area);

    let [board_side, info_side] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);

    let board = center_rect(board_side, BOARD_WIDTH, BOARD_HEIGHT);
    let rows: [Rect; 5] = Layout::vertical([
        Constraint::Length(CELL_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(CELL_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(CELL_HEIGHT),
    ])
    .areas(board);

    let mut cells = [Rect::default(); 9];
    let mut col_separators = [Rect::default(); 6];
    for (r, row) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols: [Rect; 5] = Layout::horizontal([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .areas(row);
        cells[r * 3] = cols[0];
        cells[r * 3 + 1] = cols[2];
        cells[r * 3 + 2] = cols[4];
        col_separators[r * 2] = cols[1];
        col_separators[r * 2 + 1] = cols[3];
    }

    let [sort_button, moves_block] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(info_side);

    ScreenLayout {
        title,
        cells,
        row_separators: [rows[1], rows[3]],
        col_separators,
        status,
        notice,
        help,
        sort_button,
        moves_block,
        moves: inner(moves_block),
    }
}

/// Resolves a click at (`column`, `row`) against a layout.
///
/// `entries` is the number of move list rows currently shown.
pub fn hit_test(layout: &ScreenLayout, column: u16, row: u16, entries: usize) -> Option<Target> {
    if let Some(pos) = Position::ALL
        .iter()
        .copied()
        .find(|pos| contains(layout.cells[pos.to_index()], column, row))
    {
        return Some(Target::Cell(pos));
    }

    if contains(layout.sort_button, column, row) {
        return Some(Target::SortButton);
    }

    if contains(layout.moves, column, row) {
        let index = usize::from(row - layout.moves.y);
        if index < entries {
            return Some(Target::MoveEntry(index));
        }
    }

    None
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = layout(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, regions.title);

    draw_board(frame, &regions, app);
    draw_sort_button(frame, regions.sort_button, app);
    draw_moves(frame, regions.moves_block, app);

    let status = Paragraph::new(app.state().status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, regions.status);

    if let Some(notice) = app.notice() {
        let notice = Paragraph::new(notice.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(notice, regions.notice);
    }

    let help = Paragraph::new("arrows move | Enter play | 1-9 cell | Tab history | s sort | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, regions.help);
}

fn draw_board(frame: &mut Frame, regions: &ScreenLayout, app: &App) {
    let board = app.state().current_board();
    let winner = app.state().winner();

    for pos in Position::ALL {
        let highlight = winner.is_some_and(|w| w.contains(pos));
        let cursor = *app.focus() == Focus::Board && *app.cursor() == pos;
        draw_cell(frame, regions.cells[pos.to_index()], board.get(pos), highlight, cursor);
    }

    for sep in regions.row_separators {
        let line = Paragraph::new("─".repeat(usize::from(sep.width)))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(line, sep);
    }
    for sep in regions.col_separators {
        let bar = Paragraph::new(vec![Line::from("│"); usize::from(sep.height)])
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(bar, sep);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, highlight: bool, cursor: bool) {
    let mut style = match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if highlight {
        style = style.bg(Color::Yellow);
    }
    if cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center the glyph in the cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", cell.glyph()), style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(if highlight { Style::default().bg(Color::Yellow) } else { Style::default() })
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_sort_button(frame: &mut Frame, area: Rect, app: &App) {
    let button = Paragraph::new(format!("Sort Moves: {}", app.state().sort_order().label()))
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let focused = *app.focus() == Focus::MoveList;
    let items: Vec<ListItem> = app
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut style = if entry.is_clickable() {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };
            if focused && i == *app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(entry.text(), style)))
        })
        .collect();

    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title("History"),
    );
    frame.render_widget(list, area);
}
