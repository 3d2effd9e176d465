//! Stalemate detection for tic-tac-toe.

use super::win::detect_winner;
use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winner.
#[instrument]
pub fn is_stalemate(board: &Board) -> bool {
    is_full(board) && detect_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn board_from(marks: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().zip(marks.chars()) {
            board = match c {
                'X' => board.with_mark(*pos, Player::X),
                'O' => board.with_mark(*pos, Player::O),
                _ => board,
            };
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_stalemate(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from("X...O....");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_stalemate_detection() {
        // X O X / O X X / O X O
        let board = board_from("XOXOXXOXO");
        assert!(is_full(&board));
        assert!(is_stalemate(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_stalemate() {
        // X X X / O O X / X O O
        let board = board_from("XXXOOXXOO");
        assert!(is_full(&board));
        assert!(!is_stalemate(&board));
    }
}
