//! RNG module - piece pattern selection
//!
//! Every piece is a 2x2 quad drawn uniformly from a fixed table of colour
//! patterns. A simple LCG keeps the sequence deterministic per seed, which
//! makes sessions replayable in tests and in the headless simulator.

use crate::types::CellKind::{self, ColorA as A, ColorB as B};

/// Colour patterns a piece can spawn with, in slot order TL, TR, BL, BR
pub const PIECE_PATTERNS: [[CellKind; 4]; 8] = [
    [A, A, A, A],
    [B, B, B, B],
    [A, B, A, B],
    [A, A, B, B],
    [A, B, B, A],
    [B, A, A, B],
    [A, A, A, B],
    [B, B, B, A],
];

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods; use the high half.
        (self.next_u32() >> 16) % max.max(1)
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Draws piece patterns from [`PIECE_PATTERNS`]
#[derive(Debug, Clone)]
pub struct PatternPicker {
    rng: SimpleRng,
}

impl PatternPicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    pub fn next_pattern(&mut self) -> [CellKind; 4] {
        let i = self.rng.next_range(PIECE_PATTERNS.len() as u32) as usize;
        PIECE_PATTERNS[i]
    }
}

impl Default for PatternPicker {
    fn default() -> Self {
        Self::new(1)
    }
}
