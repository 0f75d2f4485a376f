//! Generation driver: evaluate, select, reproduce until the target is matched.

use std::time::Instant;

use log::{debug, info, warn};

use crate::schema::{
    ConfigError, DegeneratePolicy, EvolutionHistory, EvolutionResult, EvolutionStats,
    EvolverConfig, GenerationReport, StopReason,
};

use super::genome::GenomeRng;
use super::organism::{Organism, average_fitness, fittest};
use super::pool::SelectionPool;
use super::population::init_population;
use super::reproduction::next_generation;

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum EvolutionError {
    #[error("Every organism in generation {generation} has zero fitness; the selection pool is empty")]
    DegeneratePopulation { generation: usize },
    #[error("Population is empty")]
    EmptyPopulation,
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result of a single generation.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// The best organism did not match; a new population was bred.
    Running(GenerationReport),
    /// The best organism matched the target. Nothing was bred.
    Converged(GenerationReport),
}

impl GenerationOutcome {
    pub fn report(&self) -> &GenerationReport {
        match self {
            Self::Running(report) | Self::Converged(report) => report,
        }
    }

    pub fn into_report(self) -> GenerationReport {
        match self {
            Self::Running(report) | Self::Converged(report) => report,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged(_))
    }
}

/// Evolution engine that runs the search.
#[derive(Debug)]
pub struct EvolutionEngine {
    config: EvolverConfig,
    target: Vec<u8>,
    rng: GenomeRng,
    population: Vec<Organism>,
    generation: usize,
    history: EvolutionHistory,
}

impl EvolutionEngine {
    /// Create a new evolution engine from a validated configuration.
    pub fn new(config: EvolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.random_seed {
            Some(seed) => GenomeRng::new(seed),
            None => GenomeRng::random(),
        };
        let target = config.target.as_bytes().to_vec();

        Ok(Self {
            config,
            target,
            rng,
            population: Vec::new(),
            generation: 0,
            history: EvolutionHistory::default(),
        })
    }

    /// Start from the given population instead of a random one.
    ///
    /// # Panics
    ///
    /// Panics if the population does not have the configured size or any
    /// organism's length differs from the target's.
    pub fn with_population(mut self, population: Vec<Organism>) -> Self {
        assert_eq!(
            population.len(),
            self.config.population.size,
            "population size does not match configuration"
        );
        self.population = population
            .into_iter()
            .map(|mut organism| {
                organism.reevaluate(&self.target);
                organism
            })
            .collect();
        self
    }

    /// Initialize the population with random organisms.
    pub fn initialize(&mut self) {
        self.population =
            init_population(&self.target, self.config.population.size, &mut self.rng);
        self.generation = 0;
        self.history = EvolutionHistory::default();
    }

    pub fn population(&self) -> &[Organism] {
        &self.population
    }

    /// Generations evaluated so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn target(&self) -> &[u8] {
        &self.target
    }

    pub fn history(&self) -> &EvolutionHistory {
        &self.history
    }

    /// Run a single generation step.
    pub fn step(&mut self) -> Result<GenerationOutcome, EvolutionError> {
        self.generation += 1;

        let best = fittest(&self.population).ok_or(EvolutionError::EmptyPopulation)?;
        let mut report = GenerationReport {
            generation: self.generation,
            best: best.to_snapshot(),
            avg_fitness: average_fitness(&self.population),
            pool_size: None,
        };

        if best.matches(&self.target) {
            self.history.record(&report);
            return Ok(GenerationOutcome::Converged(report));
        }

        let max_fitness = best.fitness();
        let pool = if max_fitness > 0.0 {
            SelectionPool::build(&self.population, &self.target, max_fitness)
        } else {
            match self.config.genetic.degenerate_policy {
                DegeneratePolicy::Fail => {
                    return Err(EvolutionError::DegeneratePopulation {
                        generation: self.generation,
                    });
                }
                DegeneratePolicy::UniformFallback => {
                    warn!(
                        "generation {}: all organisms scored zero, selecting uniformly",
                        self.generation
                    );
                    SelectionPool::uniform(&self.population)
                }
            }
        };
        report.pool_size = Some(pool.len());

        self.population = next_generation(
            &pool,
            &self.target,
            self.config.genetic.mutation_rate,
            self.config.population.size,
            &mut self.rng,
        )
        .ok_or(EvolutionError::DegeneratePopulation {
            generation: self.generation,
        })?;

        debug!(
            "generation {}: best {:.4} avg {:.4} pool {}",
            report.generation,
            report.best.fitness,
            report.avg_fitness,
            pool.len()
        );

        self.history.record(&report);
        Ok(GenerationOutcome::Running(report))
    }

    /// Run evolution with progress callback.
    ///
    /// Initializes a random population unless one was supplied. Runs until
    /// the target is matched or the optional generation guard is hit.
    pub fn run_with_callback<F>(
        &mut self,
        mut callback: F,
    ) -> Result<EvolutionResult, EvolutionError>
    where
        F: FnMut(&GenerationReport),
    {
        let start_time = Instant::now();

        if self.population.is_empty() {
            self.initialize();
        }

        let mut last_report: Option<GenerationReport> = None;
        let stop_reason = loop {
            if let Some(limit) = self.config.population.max_generations
                && self.generation >= limit
            {
                info!("stopped after {} generations without a match", self.generation);
                break StopReason::MaxGenerations;
            }

            let outcome = self.step()?;
            callback(outcome.report());
            let converged = outcome.is_converged();
            last_report = Some(outcome.into_report());

            if converged {
                info!("converged in generation {}", self.generation);
                break StopReason::Converged;
            }
        };

        let best = match last_report {
            Some(report) => report.best,
            None => fittest(&self.population)
                .ok_or(EvolutionError::EmptyPopulation)?
                .to_snapshot(),
        };

        Ok(EvolutionResult {
            best,
            stats: EvolutionStats {
                generations: self.generation,
                elapsed_seconds: start_time.elapsed().as_secs_f64(),
                stop_reason,
            },
            history: self.history.clone(),
        })
    }

    /// Run evolution (blocking).
    pub fn run(&mut self) -> Result<EvolutionResult, EvolutionError> {
        self.run_with_callback(|_| {})
    }
}
