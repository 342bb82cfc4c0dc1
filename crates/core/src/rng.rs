//! RNG module - deterministic randomness for tile placement
//!
//! The engine never reaches for a global or thread-local RNG: every game owns
//! its own [`SimpleRng`], so the same seed and the same move sequence replay
//! the same game.

use crate::types::SPAWN_FOUR_PERCENT;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Multiply-shift instead of `%`: the low bits of an LCG cycle with a tiny
    /// period, so small ranges must be taken from the high bits.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Draw the value of a freshly spawned tile: 4 with `SPAWN_FOUR_PERCENT`%
    /// probability, otherwise 2.
    pub fn spawn_value(&mut self) -> u64 {
        if self.next_range(100) < SPAWN_FOUR_PERCENT {
            4
        } else {
            2
        }
    }

    /// Current internal state (usable as a seed to continue the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
