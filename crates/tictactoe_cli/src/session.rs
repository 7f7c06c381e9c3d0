//! The turn loop: human input in, opponent replies, screen out.

use crate::error::TerminalError;
use crate::input::{InputSignal, InputSource};
use crate::view::Renderer;
use derive_new::new;
use tictactoe_engine::{Actor, GameState, IndexSelector, select_move};
use tracing::{debug, info, instrument};

/// One game between the human and the computer.
///
/// The session owns its collaborators; the game state is threaded
/// through [`Session::run`] and handed back when the game ends.
#[derive(Debug, new)]
pub struct Session<I, R, S> {
    input: I,
    renderer: R,
    selector: S,
}

impl<I, R, S> Session<I, R, S>
where
    I: InputSource,
    R: Renderer,
    S: IndexSelector,
{
    /// Plays from `state` until the game finishes or the human quits.
    ///
    /// Every pass renders once and reads one signal. A cell choice is
    /// applied for the human when it is their turn; if that hands the turn
    /// to the opponent and the game is still open, the opponent answers
    /// straight away. A finished game is rendered one last time.
    #[instrument(skip_all)]
    pub fn run(&mut self, mut state: GameState) -> Result<GameState, TerminalError> {
        info!("Game started");

        while !state.is_terminal() {
            self.renderer.render(&state)?;

            match self.input.next_signal()? {
                InputSignal::Quit => {
                    info!(moves = state.history().len(), "Game abandoned");
                    return Ok(state);
                }
                InputSignal::Idle => continue,
                InputSignal::Cell(position) => {
                    if state.turn() == Actor::Player {
                        state = state.apply_move(Actor::Player, position);
                    }
                    state = self.opponent_reply(state);
                }
            }
        }

        self.renderer.render(&state)?;
        info!(status = ?state.status(), moves = state.history().len(), "Game over");
        Ok(state)
    }

    fn opponent_reply(&mut self, state: GameState) -> GameState {
        if state.turn() != Actor::Opponent || state.is_terminal() {
            return state;
        }

        match select_move(state.board(), &mut self.selector) {
            Some(position) => {
                debug!(%position, "Opponent moves");
                state.apply_move(Actor::Opponent, position)
            }
            None => state,
        }
    }

    /// Consumes the session, returning its renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
