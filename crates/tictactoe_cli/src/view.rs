//! Text rendering of a game state.

use crate::error::TerminalError;
use derive_new::new;
use tictactoe_engine::{Actor, Board, Cell, GameState, GameStatus};

/// Single-character labels drawn for each actor's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct MarkLabels {
    /// Label for the human's mark.
    player: char,
    /// Label for the computer's mark.
    opponent: char,
}

impl MarkLabels {
    /// Label drawn for `actor`.
    pub fn for_actor(&self, actor: Actor) -> char {
        match actor {
            Actor::Player => self.player,
            Actor::Opponent => self.opponent,
        }
    }
}

impl Default for MarkLabels {
    fn default() -> Self {
        Self::new('X', 'O')
    }
}

/// Draws a game state somewhere the human can see it.
pub trait Renderer {
    /// Shows `state`, replacing whatever was shown before.
    fn render(&mut self, state: &GameState) -> Result<(), TerminalError>;
}

/// Line shown above the board for each status.
pub fn header(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "Please enter a number from 1-9",
        GameStatus::PlayerWins => "Victory!",
        GameStatus::OpponentWins => "Defeat!",
        GameStatus::Draw => "Draw!",
    }
}

/// Board as three lines of three cells, `.` for empty.
pub fn board_text(board: &Board, labels: &MarkLabels) -> String {
    let mut result = String::new();
    for (i, cell) in board.cells().iter().enumerate() {
        let symbol = match cell {
            Cell::Empty => '.',
            Cell::Marked(actor) => labels.for_actor(*actor),
        };
        result.push(' ');
        result.push(symbol);
        result.push(' ');
        if (i + 1) % 3 == 0 {
            result.push('\n');
        }
    }
    result
}

/// Full screen text: status header, then the board.
pub fn render(state: &GameState, labels: &MarkLabels) -> String {
    format!("{}\n{}", header(state.status()), board_text(state.board(), labels))
}
