//! Seeded linear congruential generator.
//!
//! Boards are shared by seed, so the exact sequence matters more than its
//! statistical quality: the constants below are fixed and every draw is a
//! pure function of the previous state.

use rand::Rng;

use crate::error::Error;

/// Deterministic sequence generator (`glibc`-style LCG).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Modulus `2^31`.
    pub const MODULUS: u64 = 0x8000_0000;
    /// Multiplier.
    pub const MULTIPLIER: u64 = 1_103_515_245;
    /// Increment.
    pub const INCREMENT: u64 = 12_345;

    /// Create a generator from `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
        }
    }

    /// Create a generator from a freshly drawn seed, returning the seed so the
    /// sequence can be reproduced later.
    pub fn from_entropy() -> (Self, u32) {
        let seed = Self::random_seed();
        (Self::new(seed), seed)
    }

    /// Draw a seed uniformly from `[1, 2^31)`.
    pub fn random_seed() -> u32 {
        rand::rng().random_range(1..Self::MODULUS as u32)
    }

    /// Advance the state and return it. Always in `[0, 2^31)`.
    pub fn next_int(&mut self) -> u32 {
        // m divides 2^64, so wrapping arithmetic followed by the mask is exact.
        self.state = Self::MULTIPLIER
            .wrapping_mul(self.state)
            .wrapping_add(Self::INCREMENT)
            & (Self::MODULUS - 1);
        self.state as u32
    }

    /// Next value in `[0, 1]` (both ends inclusive).
    pub fn next_float(&mut self) -> f64 {
        f64::from(self.next_int()) / (Self::MODULUS - 1) as f64
    }

    /// Next value in the half-open range `[start, end)`.
    ///
    /// Scales by the high bits instead of taking `next_int() % n`; the low
    /// bits of an LCG have short periods.
    pub fn next_range(&mut self, start: i64, end: i64) -> i64 {
        let under_one = f64::from(self.next_int()) / Self::MODULUS as f64;
        start + (under_one * (end - start) as f64).floor() as i64
    }

    /// Pick one element of `items`.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, Error> {
        if items.is_empty() {
            return Err(Error::EmptyChoice);
        }
        let i = self.next_range(0, items.len() as i64) as usize;
        Ok(&items[i])
    }
}
