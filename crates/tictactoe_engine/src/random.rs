//! Injectable random choice for the opponent heuristic.

use rand::Rng;
use std::collections::VecDeque;

/// Picks an index into a list of `len` candidates.
///
/// Implementations must return a value in `0..len`; callers never pass
/// `len == 0`.
pub trait IndexSelector {
    /// Chooses one of `len` candidates.
    fn select_index(&mut self, len: usize) -> usize;
}

/// Any random number generator selects uniformly.
///
/// Seed a `StdRng` for reproducible games, or use `StdRng::from_os_rng()`
/// for ordinary play.
impl<R: Rng + ?Sized> IndexSelector for R {
    fn select_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Replays a fixed sequence of indices.
///
/// Each request consumes the next scripted value, wrapped into range with
/// `%`. Once the script runs out every request answers `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    script: VecDeque<usize>,
}

impl ScriptedSelector {
    /// Creates a selector that answers with `script`, in order.
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl IndexSelector for ScriptedSelector {
    fn select_index(&mut self, len: usize) -> usize {
        self.script.pop_front().map_or(0, |i| i % len)
    }
}
