//! Phrase Evolver - Genetic algorithm that breeds random text into a target phrase.
//!
//! A population of random printable byte sequences is evolved with
//! fitness-proportional resampling, single-point crossover and per-byte
//! mutation until one organism matches the target exactly.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, progress and result types
//! - `evolution`: Organisms, genetic operators and the generation driver
//!
//! # Example
//!
//! ```rust,no_run
//! use phrase_evolver::{EvolutionEngine, EvolverConfig};
//!
//! let mut config = EvolverConfig::for_target("hello world");
//! config.genetic.mutation_rate = 0.01;
//!
//! let mut engine = EvolutionEngine::new(config).unwrap();
//! let result = engine.run().unwrap();
//!
//! println!("Matched after {} generations", result.stats.generations);
//! ```

pub mod evolution;
pub mod schema;

// Re-export commonly used types
pub use evolution::{EvolutionEngine, EvolutionError, GenomeRng, Organism};
pub use schema::{EvolutionResult, EvolverConfig, GenerationReport, StopReason};
