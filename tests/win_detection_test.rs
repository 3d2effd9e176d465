//! Exhaustive checks of win detection over every legally reachable board.

use rewind_tictactoe::invariants::{InvariantSet, TimelineInvariants};
use rewind_tictactoe::rules::{LINES, completed_lines, detect_winner, is_stalemate};
use rewind_tictactoe::{Board, GameState, Player, Position};
use std::collections::HashSet;

/// Every board reachable by legal alternating play, stopping at wins.
fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![(Board::new(), Player::X)];

    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if detect_winner(&board).is_some() {
            continue;
        }
        for pos in Position::ALL {
            if board.is_empty(pos) {
                stack.push((board.with_mark(pos, to_move), to_move.opponent()));
            }
        }
    }
    seen
}

#[test]
fn test_reachable_board_count() {
    // Well-known count of legal tic-tac-toe positions, empty board included.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_at_most_one_winner_on_reachable_boards() {
    for board in reachable_boards() {
        let lines = completed_lines(&board);
        let players: HashSet<Player> = lines.iter().map(|l| l.player).collect();
        assert!(players.len() <= 1, "both players hold a line on {:?}", board);

        // The reported line is the first complete one in priority order.
        assert_eq!(detect_winner(&board), lines.first().copied());
    }
}

#[test]
fn test_single_move_can_complete_two_lines() {
    // X: 1, 2, 3, 6 / O: 4, 5, 7, 8; X then plays 0, closing the top row and
    // the left column at once. Only the row is reported.
    let state = GameState::replay(&[
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
        Position::MiddleRight,
        Position::MiddleLeft,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
        Position::TopLeft,
    ])
    .expect("legal game");

    let lines = completed_lines(state.current_board());
    assert_eq!(lines.len(), 2);
    assert_eq!(state.winner().map(|w| w.indices()), Some([0, 1, 2]));
}

#[test]
fn test_stalemate_boards_are_full_and_lineless() {
    let stalemates: Vec<Board> = reachable_boards()
        .into_iter()
        .filter(is_stalemate)
        .collect();
    assert_eq!(stalemates.len(), 16);
    for board in stalemates {
        assert_eq!(board.occupied(), 9);
        assert!(completed_lines(&board).is_empty());
    }
}

#[test]
fn test_lines_priority_order() {
    let indices: Vec<[usize; 3]> = LINES.iter().map(|l| l.map(Position::to_index)).collect();
    assert_eq!(
        indices,
        vec![
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn test_invariants_hold_along_every_game_prefix() {
    // Walk a handful of full games through GameState, branching at each step.
    let openings = [Position::Center, Position::TopLeft, Position::BottomCenter];
    for first in openings {
        let mut state = GameState::new().play_move(first).unwrap();
        while state.winner().is_none() {
            let Some(next) = Position::ALL
                .iter()
                .copied()
                .find(|p| state.current_board().is_empty(*p))
            else {
                break;
            };
            state = state.play_move(next).unwrap();
            assert!(TimelineInvariants::check_all(&state).is_ok());

            let rewound = state.jump_to(state.current_move() / 2).unwrap();
            assert!(TimelineInvariants::check_all(&rewound).is_ok());
        }
    }
}
