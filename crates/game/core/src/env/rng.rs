//! Seeded random stream for procedural generation.
//!
//! This module provides a trait-based RNG so the dungeon generator can be
//! driven by the canonical [`SeededRng`] in play and by scripted sources in
//! tests.
//!
//! # Determinism
//!
//! Given the same seed string, [`SeededRng`] produces the same sequence of
//! values on every platform. It is a small linear congruential generator and
//! is only suitable for content variety, not for anything adversarial.

/// Source of uniformly distributed values used by content generation.
///
/// Implementations only need to provide [`RngStream::next_f64`]; the integer
/// and boolean helpers are derived from it.
pub trait RngStream {
    /// Returns the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns an integer in `[min, max]` inclusive.
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        let span = f64::from(max) - f64::from(min) + 1.0;
        (self.next_f64() * span).floor() as i32 + min
    }

    /// Returns true with the given probability.
    fn next_bool(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

/// Linear congruential generator seeded from a string.
///
/// Each step computes `state = (state * 9301 + 49297) mod 233280` and yields
/// `state / 233280`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// LCG multiplier.
    const MULTIPLIER: u64 = 9301;

    /// LCG increment.
    const INCREMENT: u64 = 49297;

    /// LCG modulus; also the divisor that maps state into `[0, 1)`.
    const MODULUS: u64 = 233_280;

    /// Creates a stream from a seed string.
    pub fn new(seed: &str) -> Self {
        Self {
            state: u64::from(hash_seed(seed)),
        }
    }

    /// Creates the stream used to generate one dungeon level.
    ///
    /// The depth is appended to the seed so that every level draws from an
    /// independent, reproducible sequence.
    pub fn for_depth(seed: &str, depth: u32) -> Self {
        Self::new(&format!("{seed}{depth}"))
    }
}

impl RngStream for SeededRng {
    fn next_f64(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        self.state as f64 / Self::MODULUS as f64
    }
}

/// Folds a seed string into a non-negative 32-bit integer.
///
/// Polynomial string hash over UTF-16 code units (`hash = hash * 31 + unit`)
/// with wrapping signed 32-bit arithmetic, followed by the absolute value.
pub fn hash_seed(seed: &str) -> u32 {
    let hash = seed
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)));

    hash.unsigned_abs()
}
