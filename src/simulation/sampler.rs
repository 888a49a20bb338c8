//! Random number source and trait sampling.
//!
//! Every random draw in the simulation goes through a [`TraitSampler`], so a
//! seeded ecosystem replays the same run.

use geo::Point;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::geometric_utils::Bounds;

/// Inclusive range of real values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    /// Lower bound (inclusive).
    pub min: f32,
    /// Upper bound (inclusive).
    pub max: f32,
}

impl FloatRange {
    /// Creates a new range.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `min <= max` and both bounds are finite.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Inclusive range of integer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    /// Lower bound (inclusive).
    pub min: i64,
    /// Upper bound (inclusive).
    pub max: i64,
}

impl IntRange {
    /// Creates a new range.
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `min <= max`.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Seeded random source used for every stochastic decision in the simulation.
#[derive(Debug, Clone)]
pub struct TraitSampler {
    rng: ChaCha8Rng,
}

impl TraitSampler {
    /// Creates a sampler that replays the same sequence for the same seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a sampler seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Draws a real value uniformly from `[lo, hi]`.
    ///
    /// Bounds given in the wrong order are swapped.
    pub fn float_between(&mut self, lo: f32, hi: f32) -> f32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        if lo == hi {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    /// Draws an integer uniformly from `[lo, hi]`.
    ///
    /// Bounds given in the wrong order are swapped.
    pub fn int_between(&mut self, lo: i64, hi: i64) -> i64 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.rng.random_range(lo..=hi)
    }

    /// Draws a real value from a configured range.
    pub fn uniform(&mut self, range: FloatRange) -> f32 {
        self.float_between(range.min, range.max)
    }

    /// Draws an integer from a configured range.
    pub fn int(&mut self, range: IntRange) -> i64 {
        self.int_between(range.min, range.max)
    }

    /// Returns `true` with probability `p` (clamped to `[0, 1]`).
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p.clamp(0.0, 1.0))
    }

    /// Draws a point uniformly inside `bounds`.
    pub fn point_in(&mut self, bounds: &Bounds) -> Point<f32> {
        Point::new(
            self.float_between(bounds.min_x, bounds.max_x),
            self.float_between(bounds.min_y, bounds.max_y),
        )
    }

    /// Draws one integer per channel, each from its own `[-w, w]` spread.
    pub fn offsets<const N: usize>(&mut self, spreads: [u8; N]) -> [i64; N] {
        spreads.map(|w| self.int_between(-i64::from(w), i64::from(w)))
    }
}
