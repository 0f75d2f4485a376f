//! Evolutionary search module for breeding random text into a target phrase.
//!
//! # Overview
//!
//! The evolutionary search system consists of:
//!
//! - **Organisms** (`organism`): Byte sequences scored by per-position match
//! - **Genome Operations** (`genome`): Random generation, crossover, and mutation
//! - **Population** (`population`): Random generation-zero population
//! - **Selection Pool** (`pool`): Fitness-proportional resampling pool
//! - **Reproduction** (`reproduction`): Child production from pool draws
//! - **Search** (`search`): The generation driver
//!
//! # Example
//!
//! ```rust,no_run
//! use phrase_evolver::schema::EvolverConfig;
//! use phrase_evolver::evolution::EvolutionEngine;
//!
//! let config = EvolverConfig::for_target("Be or not to be");
//! let mut engine = EvolutionEngine::new(config).unwrap();
//! let result = engine
//!     .run_with_callback(|report| {
//!         println!("Generation {}: {} ({:.3})",
//!             report.generation, report.best.text, report.best.fitness);
//!     })
//!     .unwrap();
//!
//! println!("Took {:.2}s", result.stats.elapsed_seconds);
//! ```

mod genome;
mod organism;
mod pool;
mod population;
mod reproduction;
mod search;

pub use genome::{GenomeRng, crossover_at};
pub use organism::{Organism, average_fitness, evaluate, fittest, fittest_index};
pub use pool::{POOL_SCALE, SelectionPool, copy_count};
pub use population::init_population;
pub use reproduction::{next_generation, reproduce};
pub use search::{EvolutionEngine, EvolutionError, GenerationOutcome};
