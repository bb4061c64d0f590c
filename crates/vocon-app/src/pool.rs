//! Round selection without repeats.

use rand::Rng;

/// Pool of round indices not yet played in the current cycle.
///
/// Each draw removes one index uniformly at random. Once every index has
/// been drawn the pool refills with the full range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundPool {
    size: usize,
    unused: Vec<usize>,
}

impl RoundPool {
    /// Create a full pool over `0..size`.
    pub fn new(size: usize) -> Self {
        Self { size, unused: (0..size).collect() }
    }

    /// Draw an unused index, refilling first if the cycle is exhausted.
    ///
    /// Returns `None` only for a pool of size zero.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.unused.is_empty() {
            self.unused.extend(0..self.size);
        }
        if self.unused.is_empty() {
            return None;
        }
        let slot = rng.random_range(0..self.unused.len());
        Some(self.unused.swap_remove(slot))
    }

    /// Indices still available in the current cycle.
    pub fn remaining(&self) -> &[usize] {
        &self.unused
    }
}
