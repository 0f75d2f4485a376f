//! Run configuration for the phrase evolver.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Lowest byte a random gene can take (space).
pub const PRINTABLE_MIN: u8 = 32;
/// Highest byte a random gene can take (`~`).
pub const PRINTABLE_MAX: u8 = 126;

/// Top-level configuration for a single evolution run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvolverConfig {
    /// Phrase the population is evolved towards.
    /// Its length fixes the length of every organism.
    #[serde(default = "default_target")]
    pub target: String,
    /// Population and generation settings.
    #[serde(default)]
    pub population: PopulationConfig,
    /// Genetic operator settings.
    #[serde(default)]
    pub genetic: GeneticAlgorithmConfig,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for EvolverConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            population: PopulationConfig::default(),
            genetic: GeneticAlgorithmConfig::default(),
            random_seed: None,
        }
    }
}

fn default_target() -> String {
    "Be or not to be".to_string()
}

/// Population and generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PopulationConfig {
    /// Number of organisms in every generation.
    #[serde(default = "default_population_size")]
    pub size: usize,
    /// Optional generation guard. `None` runs until the target is matched.
    #[serde(default)]
    pub max_generations: Option<usize>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: default_population_size(),
            max_generations: None,
        }
    }
}

fn default_population_size() -> usize {
    900
}

/// Genetic operator settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneticAlgorithmConfig {
    /// Per-byte probability of replacing a child's gene (0 disables mutation).
    #[serde(default)]
    pub mutation_rate: f64,
    /// What to do when every organism scores zero.
    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for GeneticAlgorithmConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.0,
            degenerate_policy: DegeneratePolicy::default(),
        }
    }
}

/// Handling of a generation whose best fitness is zero.
///
/// Fitness-proportional selection has nothing to weight in that case, so the
/// selection pool would be empty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Abort the run with `EvolutionError::DegeneratePopulation`.
    #[default]
    Fail,
    /// Draw parents uniformly from the whole population instead.
    UniformFallback,
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Target phrase must not be empty")]
    EmptyTarget,
    #[error("Target byte {byte:#04x} at index {index} is outside the printable range 32..=126")]
    NonPrintableTarget { index: usize, byte: u8 },
    #[error("Population size must be at least 1")]
    PopulationTooSmall,
    #[error("Mutation rate {0} must be between 0 and 1")]
    InvalidMutationRate(f64),
    #[error("Generation limit must be positive when set")]
    InvalidGenerationLimit,
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl EvolverConfig {
    /// Create a default configuration for the given target phrase.
    pub fn for_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Default::default()
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }

        // Random genes never leave the printable range, so anything else is unreachable.
        if let Some((index, &byte)) = self
            .target
            .as_bytes()
            .iter()
            .enumerate()
            .find(|(_, b)| !(PRINTABLE_MIN..=PRINTABLE_MAX).contains(*b))
        {
            return Err(ConfigError::NonPrintableTarget { index, byte });
        }

        if self.population.size == 0 {
            return Err(ConfigError::PopulationTooSmall);
        }

        let rate = self.genetic.mutation_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::InvalidMutationRate(rate));
        }

        if self.population.max_generations == Some(0) {
            return Err(ConfigError::InvalidGenerationLimit);
        }

        Ok(())
    }
}
