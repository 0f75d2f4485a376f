//! Organisms and the fitness function.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::schema::OrganismSnapshot;

/// A candidate solution: a byte sequence and its fitness against the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    sequence: Vec<u8>,
    fitness: f64,
}

impl Organism {
    /// Create an organism and score it against `target`.
    ///
    /// # Panics
    ///
    /// Panics if the sequence and target lengths differ.
    pub fn new(sequence: Vec<u8>, target: &[u8]) -> Self {
        let fitness = evaluate(&sequence, target);
        Self { sequence, fitness }
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Fitness in `[0, 1]` as of the last evaluation.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Sequence rendered as text.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.sequence)
    }

    /// Whether the sequence equals the target byte for byte.
    pub fn matches(&self, target: &[u8]) -> bool {
        self.sequence == target
    }

    /// Recompute fitness against `target`.
    pub fn reevaluate(&mut self, target: &[u8]) {
        self.fitness = evaluate(&self.sequence, target);
    }

    /// Convert to snapshot for reporting.
    pub fn to_snapshot(&self) -> OrganismSnapshot {
        OrganismSnapshot {
            text: self.text().into_owned(),
            fitness: self.fitness,
        }
    }
}

/// Fraction of positions where `sequence` and `target` hold the same byte.
///
/// # Panics
///
/// Panics if the lengths differ. Organisms are always built at the target's
/// length, so a mismatch is a construction bug.
pub fn evaluate(sequence: &[u8], target: &[u8]) -> f64 {
    assert_eq!(
        sequence.len(),
        target.len(),
        "organism length does not match target length"
    );
    if target.is_empty() {
        return 0.0;
    }

    let matching = sequence
        .iter()
        .zip(target)
        .filter(|(a, b)| a == b)
        .count();
    matching as f64 / target.len() as f64
}

/// Index of the fittest organism.
///
/// A later organism only replaces the current best when strictly fitter, so
/// ties go to the lowest index.
pub fn fittest_index(population: &[Organism]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, organism) in population.iter().enumerate() {
        match best {
            Some(b) if population[b].fitness >= organism.fitness => {}
            _ => best = Some(i),
        }
    }
    best
}

/// The fittest organism (lowest index on ties).
pub fn fittest(population: &[Organism]) -> Option<&Organism> {
    fittest_index(population).map(|i| &population[i])
}

/// Mean fitness of a population, 0 when empty.
pub fn average_fitness(population: &[Organism]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(|o| o.fitness).sum::<f64>() / population.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fitness_counts_matches() {
        assert_eq!(evaluate(b"AB", b"AB"), 1.0);
        assert_eq!(evaluate(b"AX", b"AB"), 0.5);
        assert_eq!(evaluate(b"XY", b"AB"), 0.0);
        assert_eq!(evaluate(b"abcd", b"abzz"), 0.5);
    }

    #[test]
    #[should_panic(expected = "length does not match")]
    fn test_length_mismatch_panics() {
        evaluate(b"ABC", b"AB");
    }

    #[test]
    fn test_organism_scores_on_creation() {
        let organism = Organism::new(b"AB".to_vec(), b"AB");
        assert_eq!(organism.fitness(), 1.0);
        assert!(organism.matches(b"AB"));
        assert_eq!(organism.text(), "AB");

        let snapshot = organism.to_snapshot();
        assert_eq!(snapshot.text, "AB");
        assert_eq!(snapshot.fitness, 1.0);
    }

    #[test]
    fn test_reevaluate_is_idempotent() {
        let mut organism = Organism::new(b"hexlo".to_vec(), b"hello");
        let before = organism.fitness();
        organism.reevaluate(b"hello");
        assert_eq!(organism.fitness(), before);
    }

    #[test]
    fn test_fittest_prefers_lowest_index_on_ties() {
        let target = b"abcd";
        let population = vec![
            Organism::new(b"zzzz".to_vec(), target),
            Organism::new(b"abzz".to_vec(), target),
            Organism::new(b"zzcd".to_vec(), target),
            Organism::new(b"azzz".to_vec(), target),
        ];

        assert_eq!(fittest_index(&population), Some(1));
        assert_eq!(fittest(&population).unwrap().sequence(), b"abzz");
    }

    #[test]
    fn test_fittest_empty() {
        assert_eq!(fittest_index(&[]), None);
        assert_eq!(average_fitness(&[]), 0.0);
    }

    #[test]
    fn test_average_fitness() {
        let target = b"ab";
        let population = vec![
            Organism::new(b"ab".to_vec(), target),
            Organism::new(b"zz".to_vec(), target),
        ];
        assert_eq!(average_fitness(&population), 0.5);
    }

    fn equal_length_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
        (1usize..64).prop_flat_map(|len| {
            (
                proptest::collection::vec(32u8..=126, len),
                proptest::collection::vec(32u8..=126, len),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_fitness_in_unit_interval((s, t) in equal_length_pair()) {
            let f = evaluate(&s, &t);
            prop_assert!((0.0..=1.0).contains(&f));
            prop_assert_eq!(f == 1.0, s == t);
        }

        #[test]
        fn prop_self_fitness_is_one(s in proptest::collection::vec(32u8..=126, 1..64)) {
            prop_assert_eq!(evaluate(&s, &s), 1.0);
        }

        #[test]
        fn prop_fittest_dominates(
            seqs in proptest::collection::vec(proptest::collection::vec(b'a'..=b'c', 4), 1..20)
        ) {
            let target = b"abca";
            let population: Vec<Organism> =
                seqs.into_iter().map(|s| Organism::new(s, target)).collect();
            let best = fittest_index(&population).unwrap();
            for (i, o) in population.iter().enumerate() {
                prop_assert!(population[best].fitness() >= o.fitness());
                if i < best {
                    prop_assert!(o.fitness() < population[best].fitness());
                }
            }
        }
    }
}
