//! Noninterval search binary executable.
//!
//! Entry point for the brute-force search over random point configurations;
//! successful witnesses are written to the configured output directory.

use noninterval_search::{SearchConfig, run};

fn main() {
    // Initialize logging
    env_logger::init();

    let config = SearchConfig::from_args();
    match run(&config) {
        Ok(summary) => {
            log::info!(
                "Search completed: {} successes out of {} trials",
                summary.success_count(),
                summary.trials
            );
        }
        Err(e) => {
            log::error!("Search failed: {e}");
            std::process::exit(1);
        }
    }
}
