//! Randomness sources for jitter and serve-side selection
//!
//! The simulation only ever asks for a uniform integer in an inclusive range,
//! so tests can swap the PCG generator for a scripted sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform integers
pub trait RandomSource {
    /// Next uniform integer in `lo..=hi` (returns `lo` when the range is empty)
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32;
}

/// Seeded PCG generator used in real matches
#[derive(Debug, Clone)]
pub struct GameRng(Pcg32);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }
}

impl RandomSource for GameRng {
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.0.random_range(lo..=hi)
    }
}

/// Replays a fixed list of values, cycling when exhausted
///
/// Values outside the requested range are clamped into it.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<i32>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Always yields the same value
    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedSequence {
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        if self.values.is_empty() || hi <= lo {
            return lo;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(lo, hi)
    }
}
