//! RNG module - deterministic random source for placement and item effects
//!
//! A simple LCG (Linear Congruential Generator) using constants from
//! Numerical Recipes. The whole simulation draws from one seeded instance,
//! so a session is fully reproducible from its seed.

/// Simple LCG (Linear Congruential Generator) RNG.
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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate random value in range [lo, hi) as a signed integer.
    pub fn next_between(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo < hi);
        lo + self.next_range((hi - lo) as u32) as i32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
