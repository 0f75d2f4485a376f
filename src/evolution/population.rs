//! Generation-zero population.

use super::genome::GenomeRng;
use super::organism::Organism;

/// Build `size` random organisms of the target's length, each scored on creation.
pub fn init_population(target: &[u8], size: usize, rng: &mut GenomeRng) -> Vec<Organism> {
    (0..size)
        .map(|_| Organism::new(rng.random_sequence(target.len()), target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::organism::evaluate;

    #[test]
    fn test_population_shape() {
        let mut rng = GenomeRng::new(42);
        let target = b"Be or not to be";
        let population = init_population(target, 900, &mut rng);

        assert_eq!(population.len(), 900);
        for organism in &population {
            assert_eq!(organism.sequence().len(), target.len());
            assert!(organism.sequence().iter().all(|b| (32..=126).contains(b)));
            assert_eq!(organism.fitness(), evaluate(organism.sequence(), target));
        }
    }

    #[test]
    fn test_consecutive_calls_differ() {
        let mut rng = GenomeRng::new(42);
        let target = b"a fairly long target phrase";
        let first = init_population(target, 5, &mut rng);
        let second = init_population(target, 5, &mut rng);
        assert_ne!(first, second);
    }
}
