//! Progress and result types produced by an evolution run.
//!
//! These are plain data consumed by whatever reports on the run (the CLI,
//! a test, an embedding application). The engine itself never prints.

use serde::{Deserialize, Serialize};

/// Snapshot of an organism for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrganismSnapshot {
    /// Sequence rendered as text.
    pub text: String,
    /// Fitness against the target.
    pub fitness: f64,
}

/// Per-generation report handed to the observer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationReport {
    /// Generation number, starting at 1.
    pub generation: usize,
    /// Best organism of the generation (lowest index on ties).
    pub best: OrganismSnapshot,
    /// Average fitness of the generation.
    pub avg_fitness: f64,
    /// Size of the selection pool built from this generation.
    /// `None` when the generation converged and no pool was built.
    pub pool_size: Option<usize>,
}

/// Statistics history for plotting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EvolutionHistory {
    /// Best fitness per generation.
    pub best_fitness: Vec<f64>,
    /// Average fitness per generation.
    pub avg_fitness: Vec<f64>,
}

impl EvolutionHistory {
    /// Record one generation.
    pub fn record(&mut self, report: &GenerationReport) {
        self.best_fitness.push(report.best.fitness);
        self.avg_fitness.push(report.avg_fitness);
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.best_fitness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_fitness.is_empty()
    }
}

/// Final result of an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// Best organism of the last generation evaluated.
    pub best: OrganismSnapshot,
    /// Run statistics.
    pub stats: EvolutionStats,
    /// Per-generation history.
    pub history: EvolutionHistory,
}

/// Run statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Generations evaluated.
    pub generations: usize,
    /// Wall-clock time of the run.
    pub elapsed_seconds: f64,
    /// Why the run stopped.
    pub stop_reason: StopReason,
}

/// Reason evolution stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// An organism matched the target exactly.
    Converged,
    /// The optional generation guard was hit first.
    MaxGenerations,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(generation: usize, best: f64, avg: f64) -> GenerationReport {
        GenerationReport {
            generation,
            best: OrganismSnapshot {
                text: "xx".to_string(),
                fitness: best,
            },
            avg_fitness: avg,
            pool_size: Some(100),
        }
    }

    #[test]
    fn test_history_records_in_order() {
        let mut history = EvolutionHistory::default();
        assert!(history.is_empty());

        history.record(&report(1, 0.5, 0.25));
        history.record(&report(2, 1.0, 0.5));

        assert_eq!(history.len(), 2);
        assert_eq!(history.best_fitness, vec![0.5, 1.0]);
        assert_eq!(history.avg_fitness, vec![0.25, 0.5]);
    }

    #[test]
    fn test_serialization() {
        let original = report(3, 0.5, 0.1);
        let json = serde_json::to_string(&original).unwrap();
        let parsed: GenerationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
