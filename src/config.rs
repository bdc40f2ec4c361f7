//! Configuration management for search runs.
//!
//! This module provides the command-line surface of the search: the witness
//! family, trial budget, spatial dimension, RNG seed, and output directory.
//! Everything else about the run is fixed template data.

use crate::search::template::ComplexFamily;
use crate::search::trial::TrialConfig;
use clap::Parser;
use std::path::PathBuf;

/// Main configuration structure for noninterval search runs.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct SearchConfig {
    /// Witness template family to search
    #[arg(short, long, value_enum)]
    pub family: ComplexFamily,

    /// Number of random draws to attempt
    #[arg(short, long, default_value = "1000000", value_parser = clap::value_parser!(u64).range(1..))]
    pub trials: u64,

    /// Spatial dimension of the random points
    #[arg(short, long, default_value = "3", value_parser = clap::value_parser!(u32).range(2..))]
    pub dimension: u32,

    /// RNG seed for reproducible runs (default: OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output directory for successful configurations (default: family name)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl SearchConfig {
    /// Builds a new instance of `SearchConfig` from command line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Creates a configuration with defaults for the given family.
    #[must_use]
    pub const fn new(family: ComplexFamily) -> Self {
        Self {
            family,
            trials: 1_000_000,
            dimension: 3,
            seed: None,
            output_dir: None,
        }
    }

    /// Creates a `TrialConfig` from this configuration.
    #[must_use]
    pub fn to_trial_config(&self) -> TrialConfig {
        TrialConfig::new(self.trials, self.dimension as usize, self.seed)
    }

    /// Directory successful configurations are written to.
    #[must_use]
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.family.dir_name()))
    }

    /// Validates the configuration parameters.
    ///
    /// Clap's value parsers already enforce the ranges; this re-checks them
    /// for configurations built in code.
    ///
    /// # Errors
    ///
    /// Returns an error message if any parameters are invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.trials == 0 {
            return Err("Number of trials must be at least 1".to_string());
        }
        if self.dimension < 2 {
            return Err(format!(
                "Unsupported dimension: {}. Points must live in at least 2 dimensions",
                self.dimension
            ));
        }
        Ok(())
    }
}

/// Configuration preset for quick testing.
#[derive(Debug, Clone)]
pub struct TestConfig;

impl TestConfig {
    /// Creates a small, seeded configuration suitable for unit tests.
    #[must_use]
    pub const fn small(family: ComplexFamily) -> SearchConfig {
        SearchConfig {
            family,
            trials: 20,
            dimension: 3,
            seed: Some(42),
            output_dir: None,
        }
    }

    /// Creates a medium-sized seeded configuration for integration tests.
    #[must_use]
    pub const fn medium(family: ComplexFamily) -> SearchConfig {
        SearchConfig {
            family,
            trials: 500,
            dimension: 3,
            seed: Some(42),
            output_dir: None,
        }
    }
}
