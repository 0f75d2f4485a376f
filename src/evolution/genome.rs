//! Sequence manipulation utilities for evolutionary search.
//!
//! Provides random generation, crossover, and mutation operations.

use rand::prelude::*;

use crate::schema::{PRINTABLE_MAX, PRINTABLE_MIN};

/// Random number generator wrapper for sequence operations.
///
/// Every run owns its own instance so concurrent runs never share state.
#[derive(Debug)]
pub struct GenomeRng {
    rng: StdRng,
}

impl GenomeRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Uniform printable byte in `32..=126`.
    pub fn printable_byte(&mut self) -> u8 {
        self.rng.gen_range(PRINTABLE_MIN..=PRINTABLE_MAX)
    }

    /// Random printable sequence of the given length.
    pub fn random_sequence(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.printable_byte()).collect()
    }

    /// Uniform index in `0..len`.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Single-point crossover at a random cut.
    pub fn crossover(&mut self, parent_a: &[u8], parent_b: &[u8]) -> Vec<u8> {
        let mid = self.index(parent_a.len());
        crossover_at(parent_a, parent_b, mid)
    }

    /// Replace each byte with a fresh printable byte with probability `rate`.
    pub fn mutate(&mut self, sequence: &mut [u8], rate: f64) {
        if rate <= 0.0 {
            return;
        }
        for byte in sequence.iter_mut() {
            if self.rng.r#gen::<f64>() < rate {
                *byte = self.printable_byte();
            }
        }
    }
}

/// Child sequence for a given cut index.
///
/// Positions after `mid` come from `parent_a`; positions up to and including
/// `mid` come from `parent_b`.
pub fn crossover_at(parent_a: &[u8], parent_b: &[u8], mid: usize) -> Vec<u8> {
    debug_assert_eq!(parent_a.len(), parent_b.len());
    parent_a
        .iter()
        .zip(parent_b)
        .enumerate()
        .map(|(i, (&a, &b))| if i > mid { a } else { b })
        .collect()
}
