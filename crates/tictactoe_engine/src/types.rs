//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// One of the two sides at the table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Actor {
    /// The human at the keyboard (moves first).
    Player,
    /// The computer opponent.
    Opponent,
}

impl Actor {
    /// Returns the other actor.
    pub fn other(self) -> Self {
        match self {
            Actor::Player => Actor::Opponent,
            Actor::Opponent => Actor::Player,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding an actor's mark.
    Marked(Actor),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from nine cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding `actor`'s mark.
    pub fn count(&self, actor: Actor) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Marked(actor))
            .count()
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Empty positions in board order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Places a mark. Only the engine writes to a board.
    pub(crate) fn place(&mut self, pos: Position, actor: Actor) {
        self.cells[pos.to_index()] = Cell::Marked(actor);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// The human completed a line.
    PlayerWins,
    /// The computer completed a line.
    OpponentWins,
    /// Board filled with no line completed.
    Draw,
}

impl GameStatus {
    /// Status announcing a win for `actor`.
    pub fn win_for(actor: Actor) -> Self {
        match actor {
            Actor::Player => GameStatus::PlayerWins,
            Actor::Opponent => GameStatus::OpponentWins,
        }
    }

    /// Any status other than `InProgress`.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// A single legal placement recorded in the game history.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{} -> {}", actor, position)]
pub struct Placement {
    /// Who placed the mark.
    pub actor: Actor,
    /// Where the mark went.
    pub position: Position,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(actor: Actor, position: Position) -> Self {
        Self { actor, position }
    }
}

/// Complete game state.
///
/// States are values: [`GameState::apply_move`](crate::GameState::apply_move)
/// consumes one and hands back its successor.
///
/// Serialized as its list of placements. Deserializing replays that list,
/// so board, turn and status are always derived from the moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Placement>", into = "Vec<Placement>")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Actor,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Placement>,
}

impl GameState {
    /// Creates a new game: empty board, Player to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Actor::Player,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose move is next.
    pub fn turn(&self) -> Actor {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the legal placements so far, oldest first.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// True once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

impl From<Vec<Placement>> for GameState {
    fn from(placements: Vec<Placement>) -> Self {
        GameState::replay(&placements)
    }
}

impl From<GameState> for Vec<Placement> {
    fn from(state: GameState) -> Self {
        state.history
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
