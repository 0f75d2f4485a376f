//! Reproduction: two pool draws, crossover, mutation, scoring.

use super::genome::GenomeRng;
use super::organism::Organism;
use super::pool::SelectionPool;

/// Produce one child from two parents drawn from `pool`.
///
/// Returns `None` when the pool is empty.
pub fn reproduce(
    pool: &SelectionPool,
    target: &[u8],
    mutation_rate: f64,
    rng: &mut GenomeRng,
) -> Option<Organism> {
    let parent_a = pool.draw(rng)?.sequence();
    let parent_b = pool.draw(rng)?.sequence();

    let mut child = rng.crossover(parent_a, parent_b);
    rng.mutate(&mut child, mutation_rate);

    Some(Organism::new(child, target))
}

/// Fill a whole generation from `pool`.
pub fn next_generation(
    pool: &SelectionPool,
    target: &[u8],
    mutation_rate: f64,
    size: usize,
    rng: &mut GenomeRng,
) -> Option<Vec<Organism>> {
    (0..size)
        .map(|_| reproduce(pool, target, mutation_rate, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::organism::evaluate;

    #[test]
    fn test_single_parent_pool_clones_parent() {
        let target = b"abcdef";
        let parent = Organism::new(b"abczzz".to_vec(), target);
        let pool = SelectionPool::build(std::slice::from_ref(&parent), target, parent.fitness());
        let mut rng = GenomeRng::new(9);

        for _ in 0..10 {
            let child = reproduce(&pool, target, 0.0, &mut rng).unwrap();
            assert_eq!(child, parent);
        }
    }

    #[test]
    fn test_child_is_scored_and_sized() {
        let target = b"hello world";
        let parents = vec![
            Organism::new(b"hello zzzzz".to_vec(), target),
            Organism::new(b"zzzzz world".to_vec(), target),
        ];
        let pool = SelectionPool::build(&parents, target, parents[0].fitness());
        let mut rng = GenomeRng::new(11);

        for _ in 0..50 {
            let child = reproduce(&pool, target, 0.1, &mut rng).unwrap();
            assert_eq!(child.sequence().len(), target.len());
            assert_eq!(child.fitness(), evaluate(child.sequence(), target));
        }
    }

    #[test]
    fn test_without_mutation_child_mixes_parents() {
        let target = b"abcdef";
        let parents = vec![
            Organism::new(b"abcxxx".to_vec(), target),
            Organism::new(b"xxxdef".to_vec(), target),
        ];
        let pool = SelectionPool::build(&parents, target, 0.5);
        let mut rng = GenomeRng::new(5);

        for _ in 0..50 {
            let child = reproduce(&pool, target, 0.0, &mut rng).unwrap();
            for (i, byte) in child.sequence().iter().enumerate() {
                assert!(*byte == parents[0].sequence()[i] || *byte == parents[1].sequence()[i]);
            }
        }
    }

    #[test]
    fn test_empty_pool() {
        let pool = SelectionPool::default();
        let mut rng = GenomeRng::new(0);
        assert!(reproduce(&pool, b"ab", 0.0, &mut rng).is_none());
        assert!(next_generation(&pool, b"ab", 0.0, 3, &mut rng).is_none());
    }

    #[test]
    fn test_next_generation_size() {
        let target = b"ab";
        let parents = vec![Organism::new(b"az".to_vec(), target)];
        let pool = SelectionPool::build(&parents, target, 0.5);
        let mut rng = GenomeRng::new(0);

        let next = next_generation(&pool, target, 0.0, 7, &mut rng).unwrap();
        assert_eq!(next.len(), 7);
    }
}
