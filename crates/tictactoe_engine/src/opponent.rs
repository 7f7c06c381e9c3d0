//! Heuristic computer opponent.
//!
//! Rules are tried in a fixed order and the first one that applies
//! decides the move:
//!
//! 1. take the center while it is free, even if the human threatens a line
//! 2. block the first line where the human holds two cells and the third is free
//! 3. take a free corner at random
//! 4. take any free cell at random
//!
//! The center comes before the block on purpose, so the opponent can be
//! beaten.

use crate::random::IndexSelector;
use crate::rules::WIN_LINES;
use crate::{Actor, Board, Cell, Position};
use tracing::{debug, instrument};

/// Chooses the opponent's next cell.
///
/// Returns `None` only when the board is full.
#[instrument(skip_all)]
pub fn select_move<S>(board: &Board, selector: &mut S) -> Option<Position>
where
    S: IndexSelector + ?Sized,
{
    if board.is_empty(Position::Center) {
        debug!("Taking center");
        return Some(Position::Center);
    }

    if let Some(pos) = blocking_cell(board) {
        debug!(position = %pos, "Blocking line");
        return Some(pos);
    }

    let corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    if let Some(pos) = pick(&corners, selector) {
        debug!(position = %pos, "Taking corner");
        return Some(pos);
    }

    let pos = pick(&board.empty_positions(), selector)?;
    debug!(position = %pos, "Taking free cell");
    Some(pos)
}

/// The free cell completing the first line where the human holds two.
#[instrument(skip(board))]
pub fn blocking_cell(board: &Board) -> Option<Position> {
    let mark = Cell::Marked(Actor::Player);
    WIN_LINES.iter().find_map(|line| {
        let held = line.iter().filter(|&&pos| board.get(pos) == mark).count();
        let free = line.iter().copied().find(|&pos| board.is_empty(pos));
        match (held, free) {
            (2, Some(pos)) => Some(pos),
            _ => None,
        }
    })
}

fn pick<S>(candidates: &[Position], selector: &mut S) -> Option<Position>
where
    S: IndexSelector + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }
    candidates.get(selector.select_index(candidates.len())).copied()
}
