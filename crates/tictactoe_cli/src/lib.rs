//! Terminal tic-tac-toe - the I/O around [`tictactoe_engine`].
//!
//! # Architecture
//!
//! - **Session**: the turn loop, generic over where input comes from,
//!   where the board is drawn and how the opponent breaks ties
//! - **Input**: key presses translated into [`InputSignal`]s
//! - **View**: the status header and the board as text
//! - **Config**: TOML settings plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod error;
mod input;
pub mod logging;
mod session;
mod terminal;
pub mod view;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use error::TerminalError;
pub use input::{InputSignal, InputSource, ScriptedInput, signal_for_key};
pub use session::Session;
pub use terminal::{KeyboardInput, RawModeGuard, ScreenRenderer};
pub use view::{MarkLabels, Renderer};
