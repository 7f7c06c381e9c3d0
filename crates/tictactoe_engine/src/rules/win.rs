//! Win detection logic for tic-tac-toe.

use crate::{Actor, Board, Cell, Position};
use tracing::instrument;

/// Three positions that win when held by one mark.
pub type WinLine = [Position; 3];

/// Every winning line, in the order they are scanned.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line fully held by `actor`, if any.
///
/// A line needs three marks, so boards where `actor` holds fewer are
/// answered without scanning.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, actor: Actor) -> Option<WinLine> {
    if board.count(actor) < 3 {
        return None;
    }

    let mark = Cell::Marked(actor);
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(actor)` if the actor has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Actor> {
    [Actor::Player, Actor::Opponent]
        .into_iter()
        .find(|&actor| winning_line(board, actor).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell::{Empty as E, Marked};

    const X: Cell = Marked(Actor::Player);
    const O: Cell = Marked(Actor::Opponent);

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert_eq!(check_winner(&board), Some(Actor::Player));
        assert_eq!(
            winning_line(&board, Actor::Player),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_cells([X, X, O, E, O, E, O, X, E]);
        assert_eq!(check_winner(&board), Some(Actor::Opponent));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_cells([X, X, E, E, E, E, E, E, E]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, O]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_reported() {
        // Top row and left column both complete.
        let board = Board::from_cells([X, X, X, X, O, O, X, O, O]);
        assert_eq!(winning_line(&board, Actor::Player), Some(WIN_LINES[0]));
    }
}
