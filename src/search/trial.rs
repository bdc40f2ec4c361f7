//! Trial orchestration: repeated random draws with full permutation search.
//!
//! This is intentionally a lottery: many cheap random draws rather than one
//! expensive exact search. Each draw either yields a witness under some
//! labeling or is discarded; the run ends when the trial budget is spent.

use crate::errors::SearchResult;
use crate::output::{ResultSink, Witness};
use crate::search::permutation::search;
use crate::search::template::WitnessTemplate;
use crate::util::{draw_points, rng_from_seed};
use num_traits::cast::NumCast;
use rand::rngs::StdRng;
use std::time::Instant;

/// Configuration for one search run.
#[derive(Debug, Clone)]
pub struct TrialConfig {
    /// Number of random draws to attempt.
    pub trials: u64,
    /// Spatial dimension of the random points.
    pub dimension: usize,
    /// RNG seed; `None` draws fresh entropy from the OS.
    pub seed: Option<u64>,
}

impl Default for TrialConfig {
    /// Defaults matching the reference workload: a million 3-d draws.
    fn default() -> Self {
        Self {
            trials: 1_000_000,
            dimension: 3,
            seed: None,
        }
    }
}

impl TrialConfig {
    /// Creates a new trial configuration.
    #[must_use]
    pub const fn new(trials: u64, dimension: usize, seed: Option<u64>) -> Self {
        Self {
            trials,
            dimension,
            seed,
        }
    }
}

/// One successful draw, as reported in the run summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuccessRecord {
    /// Sequential identifier, starting at 1, also used for file naming.
    pub id: u64,
    /// Draw number (0-based) on which the success occurred.
    pub trial: u64,
    /// Lower threshold bound of the witness.
    pub t_connect: f64,
    /// Upper threshold bound of the witness.
    pub t_nonconnect: f64,
}

/// Aggregate results of a search run.
#[derive(Debug, Clone)]
pub struct TrialSummary {
    /// Number of draws attempted.
    pub trials: u64,
    /// Per-success threshold records, in discovery order.
    pub successes: Vec<SuccessRecord>,
    /// Wall-clock time of the run.
    pub elapsed_time: std::time::Duration,
}

impl TrialSummary {
    /// Number of successful draws.
    #[must_use]
    pub fn success_count(&self) -> u64 {
        self.successes.len() as u64
    }

    /// Fraction of draws that produced a witness.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let successes: f64 = NumCast::from(self.successes.len()).unwrap_or(0.0);
        let trials: f64 = NumCast::from(self.trials).unwrap_or(1.0);
        successes / trials
    }
}

/// Drives repeated random draws through the permutation search.
pub struct TrialRunner {
    config: TrialConfig,
    rng: StdRng,
}

impl TrialRunner {
    /// Creates a runner, seeding the RNG from the configuration.
    #[must_use]
    pub fn new(config: TrialConfig) -> Self {
        let rng = rng_from_seed(config.seed);
        Self { config, rng }
    }

    /// Runs the full trial budget against one template.
    ///
    /// Each success gets the next sequential identifier and is handed to
    /// `sink`; a sink failure is logged and skipped so one bad write never
    /// aborts the run. The budget is always exhausted regardless of how
    /// many successes accumulate.
    ///
    /// # Errors
    ///
    /// Propagates template and draw-size errors from the permutation
    /// search; these indicate misconfiguration, not bad luck, and abort the
    /// run immediately.
    pub fn run(
        &mut self,
        template: &WitnessTemplate,
        sink: &mut dyn ResultSink,
    ) -> SearchResult<TrialSummary> {
        template.validate()?;

        let start_time = Instant::now();
        let role_count = template.role_count();
        let mut successes: Vec<SuccessRecord> = Vec::new();

        log::info!(
            "Searching template '{}' ({} roles) in dimension {}, {} trials",
            template.name,
            role_count,
            self.config.dimension,
            self.config.trials
        );

        for trial in 0..self.config.trials {
            let points = draw_points(&mut self.rng, role_count, self.config.dimension)?;
            let Some(outcome) = search(&points, template)? else {
                if trial > 0 && trial % 100_000 == 0 {
                    log::debug!(
                        "Trial {}/{}, {} successes so far",
                        trial,
                        self.config.trials,
                        successes.len()
                    );
                }
                continue;
            };

            let id = successes.len() as u64 + 1;
            let witness = Witness {
                points: outcome
                    .labeling
                    .iter()
                    .map(|&index| points.point(index).to_vec())
                    .collect(),
                result: outcome.result,
            };

            log::info!(
                "Success {id} on trial {trial}: low={}, up={}",
                outcome.result.t_connect,
                outcome.result.t_nonconnect
            );
            if let Err(e) = sink.record(id, &witness) {
                log::warn!(
                    "Failed to persist success {id} to {} sink, continuing: {e}",
                    sink.sink_name()
                );
            }

            successes.push(SuccessRecord {
                id,
                trial,
                t_connect: outcome.result.t_connect,
                t_nonconnect: outcome.result.t_nonconnect,
            });
        }

        let elapsed_time = start_time.elapsed();
        log::info!(
            "total success count: {} out of {} trials ({elapsed_time:.2?})",
            successes.len(),
            self.config.trials
        );

        Ok(TrialSummary {
            trials: self.config.trials,
            successes,
            elapsed_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;
    use approx::assert_relative_eq;

    #[test]
    fn test_trial_config_default() {
        let config = TrialConfig::default();
        assert_eq!(config.trials, 1_000_000);
        assert_eq!(config.dimension, 3);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_runner_exhausts_budget() {
        let template = WitnessTemplate::disk();
        let mut runner = TrialRunner::new(TrialConfig::new(25, 3, Some(11)));
        let mut sink = MemorySink::new();

        let summary = runner.run(&template, &mut sink).expect("run completes");
        assert_eq!(summary.trials, 25);
        assert_eq!(summary.success_count(), sink.records.len() as u64);
        assert!(summary.success_rate() >= 0.0 && summary.success_rate() <= 1.0);
    }

    #[test]
    fn test_runner_rejects_malformed_template() {
        let mut template = WitnessTemplate::disk();
        template.forbidden_edges.clear();
        let mut runner = TrialRunner::new(TrialConfig::new(5, 3, Some(1)));
        let mut sink = MemorySink::new();

        assert!(runner.run(&template, &mut sink).is_err());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let template = WitnessTemplate::ball();
        let config = TrialConfig::new(10, 3, Some(424_242));

        let mut first_sink = MemorySink::new();
        let first = TrialRunner::new(config.clone())
            .run(&template, &mut first_sink)
            .expect("run completes");

        let mut second_sink = MemorySink::new();
        let second = TrialRunner::new(config)
            .run(&template, &mut second_sink)
            .expect("run completes");

        assert_eq!(first.success_count(), second.success_count());
        assert_eq!(first_sink.records, second_sink.records);
        for (a, b) in first.successes.iter().zip(&second.successes) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.trial, b.trial);
            assert_relative_eq!(a.t_connect, b.t_connect);
            assert_relative_eq!(a.t_nonconnect, b.t_nonconnect);
        }
    }

    #[test]
    fn test_identifiers_are_sequential() {
        // Whatever successes occur, ids must count up from 1 with a
        // strict threshold interval each.
        let template = WitnessTemplate::disk();
        let mut runner = TrialRunner::new(TrialConfig::new(500, 2, Some(7)));
        let mut sink = MemorySink::new();

        let summary = runner.run(&template, &mut sink).expect("run completes");
        for (offset, record) in summary.successes.iter().enumerate() {
            assert_eq!(record.id, offset as u64 + 1);
            assert!(record.t_connect < record.t_nonconnect);
        }
    }

    #[test]
    fn test_success_rate_empty_budget() {
        let summary = TrialSummary {
            trials: 0,
            successes: vec![],
            elapsed_time: std::time::Duration::from_millis(0),
        };
        assert_relative_eq!(summary.success_rate(), 0.0);
    }
}
