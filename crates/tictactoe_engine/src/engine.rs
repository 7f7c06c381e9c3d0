//! State transitions for tic-tac-toe.

use super::rules::{draw, win};
use super::types::{Actor, GameState, GameStatus, Placement};
use super::Position;
use tracing::{debug, info, instrument};

impl GameState {
    /// Places `actor`'s mark at `position` and returns the successor state.
    ///
    /// Occupied cells and finished games absorb the move: the state comes
    /// back unchanged and the turn does not pass. Otherwise the status is
    /// scored against the board as it stands after the placement and the
    /// turn goes to the other actor.
    #[must_use]
    #[instrument(skip(self), fields(turn = ?self.turn, status = ?self.status))]
    pub fn apply_move(mut self, actor: Actor, position: Position) -> GameState {
        if self.status.is_terminal() {
            debug!("Game already over, move ignored");
            return self;
        }

        if !self.board.is_empty(position) {
            debug!("Cell occupied, move ignored");
            return self;
        }

        self.board.place(position, actor);
        self.history.push(Placement::new(actor, position));
        self.turn = actor.other();
        self.status = score(&self, actor);

        if self.status.is_terminal() {
            info!(status = ?self.status, moves = self.history.len(), "Game finished");
        }

        self
    }

    /// Rebuilds a game from a list of placements, starting from a new game.
    ///
    /// Entries that would be illegal at their point in the sequence are
    /// absorbed the same way [`apply_move`](Self::apply_move) absorbs them.
    #[instrument(skip(placements), fields(count = placements.len()))]
    pub fn replay(placements: &[Placement]) -> GameState {
        placements
            .iter()
            .fold(GameState::new(), |state, placement| {
                state.apply_move(placement.actor, placement.position)
            })
    }
}

/// Status after `actor` has just placed a mark.
fn score(state: &GameState, actor: Actor) -> GameStatus {
    if let Some(line) = win::winning_line(&state.board, actor) {
        debug!(?line, "Line completed");
        GameStatus::win_for(actor)
    } else if draw::is_draw(&state.board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
