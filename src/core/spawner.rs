//! Shape selection - where the next falling piece comes from
//!
//! The source is injectable so tests (and replays) can script deterministic
//! sequences instead of depending on entropy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::PieceKind;

/// Supplies the kind of each freshly spawned piece
pub trait ShapeSource {
    fn next_shape(&mut self) -> PieceKind;
}

/// Uniform random selection over the 7 catalog entries
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seeded source; the same seed yields the same shape sequence
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeSource for RandomSource {
    fn next_shape(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// Scripted source cycling over a fixed sequence; for tests and replays
#[derive(Debug, Clone)]
pub struct SequenceSource {
    shapes: Vec<PieceKind>,
    next: usize,
}

impl SequenceSource {
    /// Returns `None` for an empty sequence, which could never supply a shape
    pub fn new(shapes: Vec<PieceKind>) -> Option<Self> {
        if shapes.is_empty() {
            return None;
        }
        Some(Self { shapes, next: 0 })
    }
}

impl ShapeSource for SequenceSource {
    fn next_shape(&mut self) -> PieceKind {
        let kind = self.shapes[self.next % self.shapes.len()];
        self.next += 1;
        kind
    }
}
