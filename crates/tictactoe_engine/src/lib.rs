//! Tic-tac-toe engine - pure game logic for a human against the computer.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] values, replaced wholesale by
//!   [`GameState::apply_move`]
//! - **Rules**: win and draw detection over a [`Board`]
//! - **Opponent**: [`select_move`], a fixed-priority heuristic whose random
//!   choices go through an [`IndexSelector`]
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictactoe_engine::{Actor, GameState, Position, select_move};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let state = GameState::new().apply_move(Actor::Player, Position::TopLeft);
//! let reply = select_move(state.board(), &mut rng).expect("board has room");
//! let state = state.apply_move(Actor::Opponent, reply);
//! assert_eq!(reply, Position::Center);
//! assert_eq!(state.turn(), Actor::Player);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod opponent;
mod position;
mod random;
pub mod rules;
mod types;

pub use opponent::{blocking_cell, select_move};
pub use position::Position;
pub use random::{IndexSelector, ScriptedSelector};
pub use rules::{WIN_LINES, WinLine};
pub use types::{Actor, Board, Cell, GameState, GameStatus, Placement};
