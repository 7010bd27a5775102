//! A simple pseudorandom number generator.
//!
//! A translation of the *really* minimal C PCG32 implementation from
//! <https://www.pcg-random.org/>, satisfying the [rand_core] traits.
//!
//! The library itself draws no randomness; the generator exists so the
//! property-test harness can generate formulas deterministically from a fixed
//! seed, with no platform or version drift in the sequence.

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// State and increment.
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        (xorshifted as u32).rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        const INCREMENT: u64 = 1442695040888963407;
        Self {
            state: u64::from_le_bytes(seed).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

impl MinimalPCG32 {
    /// A draw from `[0, bound)`, by simple modulus.
    ///
    /// The slight bias of the modulus is irrelevant for test generation.
    pub fn below(&mut self, bound: usize) -> usize {
        (self.next_u32() as usize) % bound.max(1)
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn sequences_are_reproducible() {
        let mut first = MinimalPCG32::from_seed(7_u64.to_le_bytes());
        let mut second = MinimalPCG32::from_seed(7_u64.to_le_bytes());

        for _ in 0..32 {
            assert_eq!(first.next_u32(), second.next_u32());
        }
    }

    #[test]
    fn seeds_matter() {
        let mut first = MinimalPCG32::from_seed(7_u64.to_le_bytes());
        let mut second = MinimalPCG32::from_seed(8_u64.to_le_bytes());

        let firsts: Vec<u32> = (0..8).map(|_| first.next_u32()).collect();
        let seconds: Vec<u32> = (0..8).map(|_| second.next_u32()).collect();
        assert_ne!(firsts, seconds);
    }
}
