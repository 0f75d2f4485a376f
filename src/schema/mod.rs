//! Schema module - Configuration and result types for evolution runs.

mod config;
mod evolution;

pub use config::*;
pub use evolution::*;
