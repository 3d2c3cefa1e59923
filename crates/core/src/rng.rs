//! RNG module - deterministic piece generation
//!
//! Provides a simple LCG for deterministic testing and a `PieceFactory`
//! that stamps every generated piece with a strictly increasing id.

use crate::types::{Piece, PieceKind};

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Generates pieces with uniformly random kinds and unique ids.
///
/// The factory is the only producer of pieces; containers never create them.
/// Ids start at 1 and never repeat within one factory instance.
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: SimpleRng,
    next_id: u32,
}

impl PieceFactory {
    /// Create a new factory with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 1,
        }
    }

    /// Generate the next piece: uniform kind, monotonically increasing id.
    pub fn next_piece(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(kind, id)
    }

    /// Id the next generated piece will carry.
    pub fn peek_next_id(&self) -> u32 {
        self.next_id
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new(1)
    }
}
