//! Random number sources for die faces.

use std::fmt;

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Source of uniformly distributed integers.
pub trait RandomSource: fmt::Debug {
    /// Draw an integer uniformly from `min..=max`.
    fn uniform_int(&mut self, min: u32, max: u32) -> u32;
}

impl RandomSource for StdRng {
    fn uniform_int(&mut self, min: u32, max: u32) -> u32 {
        self.gen_range(min..=max)
    }
}

impl RandomSource for ThreadRng {
    fn uniform_int(&mut self, min: u32, max: u32) -> u32 {
        self.gen_range(min..=max)
    }
}

/// Scripted source that replays a fixed sequence, cycling when exhausted.
///
/// Values outside the requested range are clamped into it, so a script
/// written for six-sided dice stays valid for smaller dice.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<u32>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, next: 0 }
    }

    /// Number of values drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl RandomSource for SequenceRandom {
    fn uniform_int(&mut self, min: u32, max: u32) -> u32 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(min, max)
    }
}
