#![allow(clippy::multiple_crate_versions)]
#![warn(missing_docs)]

//! Randomized search for noninterval point configurations.
//!
//! This library brute-forces small labeled point sets in Euclidean space
//! whose distance pattern cannot be reproduced by any single threshold of a
//! disk-based (Čech-style) or ball-radius (Vietoris–Rips-style) complex:
//! there is a gap between the smallest threshold realizing every required
//! edge and face and the largest threshold excluding every forbidden one.
//!
//! # Key Features
//!
//! - Numerically safe circumradius computation (degenerate triples map to
//!   an infinite radius instead of NaN)
//! - Two fixed witness templates, evaluated by one generic evaluator
//! - Exhaustive, deterministic permutation search per random draw
//! - Seedable trial orchestration with CSV/threshold-file persistence
//!
//! # Example
//!
//! ```rust,no_run
//! use noninterval_search::config::{SearchConfig, TestConfig};
//! use noninterval_search::search::template::ComplexFamily;
//!
//! let config = TestConfig::small(ComplexFamily::Disk);
//! let summary = noninterval_search::run(&config).expect("search run failed");
//! println!("{} successes", summary.success_count());
//! ```

// Module declarations (avoiding mod.rs files)
/// Error types for the search library.
pub mod errors;

/// Configuration management for search runs.
pub mod config;

/// Random point generation helpers.
pub mod util;

/// Persistence of successful configurations.
pub mod output;

/// The combinatorial-geometric search engine.
pub mod search {
    /// Threshold-interval evaluation of one labeling.
    pub mod evaluate;
    /// Distance and circumradius computations.
    pub mod geometry;
    /// Exhaustive role-labeling search over one draw.
    pub mod permutation;
    /// Witness templates for the two complex families.
    pub mod template;
    /// Trial orchestration over a budget of random draws.
    pub mod trial;
}

// Re-exports for convenience
pub use config::SearchConfig;
pub use errors::{SearchError, SearchResult};
pub use output::{FsSink, MemorySink, ResultSink, Witness};
pub use search::evaluate::{ConditionResult, evaluate};
pub use search::geometry::{DistanceMatrix, PointSet, circumradius};
pub use search::permutation::{SearchOutcome, search as search_labelings};
pub use search::template::{ComplexFamily, WitnessTemplate};
pub use search::trial::{TrialConfig, TrialRunner, TrialSummary};

/// Runs a full search with the given configuration.
///
/// Builds the family's witness template, opens a filesystem sink in the
/// resolved output directory, and exhausts the trial budget.
///
/// # Errors
///
/// Returns [`SearchError::InvalidParameters`] for invalid configuration,
/// [`SearchError::Persistence`] if the output directory cannot be created,
/// and propagates template errors from the orchestrator.
pub fn run(config: &SearchConfig) -> SearchResult<TrialSummary> {
    config
        .validate()
        .map_err(SearchError::InvalidParameters)?;

    let template = config.family.template();
    let output_dir = config.resolved_output_dir();

    log::info!("Witness family: {}", template.name);
    log::info!("Dimension: {}", config.dimension);
    log::info!("Trial budget: {}", config.trials);
    if let Some(seed) = config.seed {
        log::info!("Seed: {seed}");
    }
    log::info!("Output directory: {}", output_dir.display());

    let mut sink = FsSink::new(output_dir)?;
    let mut runner = TrialRunner::new(config.to_trial_config());
    runner.run(&template, &mut sink)
}
