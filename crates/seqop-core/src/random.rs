//! Uniform integer sources for shuffling.
//!
//! Any `rand::Rng` works out of the box. `Scripted` replays fixed draws, which
//! makes a shuffle reproducible without depending on a generator's stream.

use rand::Rng;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Draw an integer in `[0, n)`. Callers never pass `n == 0`.
    fn next_in_range(&mut self, n: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_in_range(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Each draw is reduced modulo the requested bound so the result always lies
/// in range. An empty script always yields 0.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    draws: Vec<usize>,
    cursor: usize,
}

impl Scripted {
    pub fn new(draws: Vec<usize>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for Scripted {
    fn next_in_range(&mut self, n: usize) -> usize {
        if self.draws.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw % n
    }
}
