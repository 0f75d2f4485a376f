//! Fitness-proportional selection pool.

use super::genome::GenomeRng;
use super::organism::Organism;

/// Copies contributed by an organism whose fitness equals the generation's maximum.
pub const POOL_SCALE: f64 = 100.0;

/// Transient multiset of organism copies, weighted by relative fitness.
///
/// Rebuilt every generation and dropped once the next population exists.
#[derive(Debug, Clone, Default)]
pub struct SelectionPool {
    members: Vec<Organism>,
}

impl SelectionPool {
    /// Build the pool for one generation.
    ///
    /// Each organism is re-scored and contributes
    /// `floor(fitness / max_fitness * 100)` copies. A `max_fitness` of zero
    /// yields an empty pool.
    pub fn build(population: &[Organism], target: &[u8], max_fitness: f64) -> Self {
        let mut members = Vec::new();
        for organism in population {
            let mut copy = organism.clone();
            copy.reevaluate(target);
            let copies = copy_count(copy.fitness(), max_fitness);
            members.extend(std::iter::repeat_n(copy, copies));
        }
        Self { members }
    }

    /// One copy of every organism, for uniform parent selection.
    pub fn uniform(population: &[Organism]) -> Self {
        Self {
            members: population.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Draw a member uniformly with replacement. `None` if the pool is empty.
    pub fn draw(&self, rng: &mut GenomeRng) -> Option<&Organism> {
        if self.members.is_empty() {
            return None;
        }
        Some(&self.members[rng.index(self.members.len())])
    }

    /// Copies held of organisms with the given sequence.
    pub fn count_of(&self, sequence: &[u8]) -> usize {
        self.members
            .iter()
            .filter(|m| m.sequence() == sequence)
            .count()
    }
}

/// Copies an organism of `fitness` contributes relative to `max_fitness`.
pub fn copy_count(fitness: f64, max_fitness: f64) -> usize {
    if max_fitness <= 0.0 || fitness <= 0.0 {
        return 0;
    }
    ((fitness / max_fitness) * POOL_SCALE).floor() as usize
}
