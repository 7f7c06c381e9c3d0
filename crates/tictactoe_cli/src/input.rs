//! Translating keys into game input.

use crate::error::TerminalError;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use tictactoe_engine::Position;

/// What the human asked for with their last key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    /// Nothing usable: a stray key, `0`, or a key release.
    Idle,
    /// A cell chosen with the digits 1-9.
    Cell(Position),
    /// Leave the game.
    Quit,
}

/// Supplies the human's input, one signal per call.
pub trait InputSource {
    /// Blocks until the next signal is available.
    fn next_signal(&mut self) -> Result<InputSignal, TerminalError>;
}

/// Maps a key press to a signal.
///
/// Digits 1-9 select cells 0-8. `Esc`, `q` and Ctrl-C quit, since raw
/// mode keeps Ctrl-C from reaching the process as an interrupt.
pub fn signal_for_key(key: KeyEvent) -> InputSignal {
    if key.kind != KeyEventKind::Press {
        return InputSignal::Idle;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => InputSignal::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputSignal::Quit,
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(Position::from_number)
            .map_or(InputSignal::Idle, InputSignal::Cell),
        _ => InputSignal::Idle,
    }
}

/// Input replayed from a fixed list, quitting once it runs dry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    signals: VecDeque<InputSignal>,
}

impl ScriptedInput {
    /// Creates input that yields `signals` in order.
    pub fn new(signals: impl IntoIterator<Item = InputSignal>) -> Self {
        Self {
            signals: signals.into_iter().collect(),
        }
    }

    /// Input that picks the given 1-based cell numbers in order.
    ///
    /// Numbers outside 1-9 become [`InputSignal::Idle`], as a stray key would.
    pub fn from_numbers(numbers: impl IntoIterator<Item = u32>) -> Self {
        Self::new(numbers.into_iter().map(|n| {
            Position::from_number(n).map_or(InputSignal::Idle, InputSignal::Cell)
        }))
    }
}

impl InputSource for ScriptedInput {
    fn next_signal(&mut self) -> Result<InputSignal, TerminalError> {
        Ok(self.signals.pop_front().unwrap_or(InputSignal::Quit))
    }
}
