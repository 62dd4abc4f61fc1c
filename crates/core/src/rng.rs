//! RNG module - piece selection
//!
//! Every spawn picks one of the seven kinds uniformly and independently, so
//! repeats are possible. The source of randomness is a trait so hosts can
//! choose between OS entropy, a fixed seed, or a scripted sequence.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::types::PieceKind;

/// Randomness capability used by the engine when spawning pieces.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Value in `[0, bound)`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize {
        (self.next_u32() as usize) % bound
    }
}

/// Pick a kind uniformly at random.
pub fn draw_kind<R: RandomSource + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.next_index(PieceKind::ALL.len())]
}

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

    /// Current internal state (usable as a seed to replay from here).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_index(&mut self, bound: usize) -> usize {
        // Low LCG bits cycle with a short period; use the high half.
        ((self.next_u32() >> 16) as usize) % bound
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// `rand`-backed source for real play.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Replays a fixed list of kinds, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct Scripted {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl Scripted {
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "scripted piece sequence must not be empty");
        Self { kinds, pos: 0 }
    }

    /// The same kind forever.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }

    fn advance(&mut self) -> PieceKind {
        let kind = self.kinds[self.pos];
        self.pos = (self.pos + 1) % self.kinds.len();
        kind
    }
}

impl RandomSource for Scripted {
    fn next_u32(&mut self) -> u32 {
        self.advance().index() as u32
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.advance().index() % bound
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}
