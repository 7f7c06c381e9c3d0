//! Keyboard and screen backed by crossterm.

use crate::error::TerminalError;
use crate::input::{InputSignal, InputSource, signal_for_key};
use crate::view::{self, MarkLabels, Renderer};
use crossterm::{
    cursor::MoveTo,
    event::{self, Event},
    execute,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::io::Write;
use tictactoe_engine::GameState;
use tracing::{debug, instrument, warn};

/// Keeps the terminal in raw mode while alive.
///
/// Hold one for the whole game so keys typed between reads are neither
/// echoed nor line-buffered.
#[derive(Debug)]
pub struct RawModeGuard;

impl RawModeGuard {
    /// Switches the terminal to raw mode.
    pub fn enable() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to leave raw mode");
        }
    }
}

/// Reads single key presses without waiting for Enter.
///
/// Expects the terminal to be in raw mode; see [`RawModeGuard`].
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    /// Creates keyboard input.
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for KeyboardInput {
    #[instrument(skip(self))]
    fn next_signal(&mut self) -> Result<InputSignal, TerminalError> {
        let signal = match event::read()? {
            Event::Key(key) => signal_for_key(key),
            _ => InputSignal::Idle,
        };
        debug!(?signal, "Key read");
        Ok(signal)
    }
}

/// Clears the screen and prints the board text.
///
/// Line breaks are written as `\r\n`, since raw mode does not return the
/// cursor to the first column on `\n`.
pub struct ScreenRenderer<W: Write> {
    out: W,
    labels: MarkLabels,
}

impl<W: Write> ScreenRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W, labels: MarkLabels) -> Self {
        Self { out, labels }
    }

    /// Consumes the renderer, returning its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ScreenRenderer<W> {
    fn render(&mut self, state: &GameState) -> Result<(), TerminalError> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        let text = view::render(state, &self.labels).replace('\n', "\r\n");
        write!(self.out, "{}\r\n", text)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Actor, Position};

    fn render_to_string(state: &GameState) -> String {
        let mut renderer = ScreenRenderer::new(Vec::new(), MarkLabels::default());
        renderer.render(state).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_clears_and_homes_before_board() {
        let state = GameState::new().apply_move(Actor::Player, Position::Center);
        let out = render_to_string(&state);

        let prefix = "\x1b[2J\x1b[1;1H";
        assert!(out.starts_with(prefix), "{out:?}");
        assert_eq!(
            &out[prefix.len()..],
            "Please enter a number from 1-9\r\n \
             .  .  . \r\n \
             .  X  . \r\n \
             .  .  . \r\n\r\n"
        );
    }

    #[test]
    fn test_each_frame_starts_with_clear() {
        let mut renderer = ScreenRenderer::new(Vec::new(), MarkLabels::default());
        renderer.render(&GameState::new()).unwrap();
        renderer.render(&GameState::new()).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();

        assert_eq!(out.matches("\x1b[2J\x1b[1;1H").count(), 2);
        assert!(!out.replace("\r\n", "").contains('\n'));
    }
}
