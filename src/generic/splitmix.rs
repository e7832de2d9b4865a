//! A small deterministic pseudorandom number generator.
//!
//! A translation of Sebastiano Vigna's SplitMix64, implemented against the
//! [rand_core] traits so the [context](crate::context) can stay generic
//! over its source of randomness while defaulting to something simple,
//! fast, and reproducible.
//!
//! Randomness plays no part in a default solve: the single consumer is the
//! optional random-decision bias, which defaults to zero. Fixing the seed
//! fixes the entire search.

use rand_core::{impls, Error, RngCore, SeedableRng};

/// SplitMix64 state.
#[derive(Default)]
pub struct SplitMix64 {
    state: u64,
}

impl RngCore for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        SplitMix64 {
            state: u64::from_le_bytes(seed),
        }
    }
}

#[cfg(test)]
mod splitmix_tests {
    use super::*;

    #[test]
    fn seeds_are_deterministic() {
        let mut a = SplitMix64::from_seed(91u64.to_le_bytes());
        let mut b = SplitMix64::from_seed(91u64.to_le_bytes());
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn seeds_differ() {
        let mut a = SplitMix64::from_seed(1u64.to_le_bytes());
        let mut b = SplitMix64::from_seed(2u64.to_le_bytes());
        let a_run: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let b_run: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_ne!(a_run, b_run);
    }

    #[test]
    fn bytes_fill() {
        let mut rng = SplitMix64::from_seed(7u64.to_le_bytes());
        let mut buffer = [0u8; 24];
        rng.fill_bytes(&mut buffer);
        assert!(buffer.iter().any(|&byte| byte != 0));
    }
}
