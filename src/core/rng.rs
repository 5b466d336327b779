//! RNG module - deterministic gem drawing
//!
//! A simple LCG keeps games reproducible from a seed, which the tests rely
//! on. `GemBag` draws uniformly from the palette; refill code takes the draw
//! as a closure so tests can script exact sequences instead.

use crate::types::GemKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
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
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (usable as a seed to continue the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform gem source backed by [`SimpleRng`]
#[derive(Debug, Clone)]
pub struct GemBag {
    rng: SimpleRng,
}

impl GemBag {
    /// Create a new bag with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw one gem kind, uniformly from the palette
    pub fn draw(&mut self) -> GemKind {
        let idx = self.rng.next_range(GemKind::ALL.len() as u32) as usize;
        GemKind::ALL[idx]
    }

    /// Current RNG state (for restarting a game with the same sequence)
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for GemBag {
    fn default() -> Self {
        Self::new(1)
    }
}
