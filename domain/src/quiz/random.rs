//! Injectable randomness for question selection

use std::collections::VecDeque;

/// Source of uniformly distributed indices
///
/// The engine draws every random decision through this trait, so tests and
/// replays can supply a fixed sequence.
pub trait RandomSource {
    /// Return an index uniformly distributed in `[0, bound)`
    ///
    /// Callers never pass `bound == 0`.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Fisher–Yates shuffle: for `i` from last down to 1, swap with `j` in `[0, i]`
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Deterministic source replaying a scripted list of draws
///
/// Each scripted value is reduced modulo the requested bound. Once the
/// script runs out every draw returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Source that always returns 0
    pub fn zeros() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.draws.pop_front().map_or(0, |v| v % bound)
    }
}

/// Source that always picks the largest index
///
/// With this source [`shuffle`] leaves the input order unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityRandom;

impl RandomSource for IdentityRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        bound - 1
    }
}
