//! Persistence of successful configurations.
//!
//! The search core hands each success to a [`ResultSink`]; the filesystem
//! sink writes the two-file format consumed by the visualization tooling
//! (`points<id>.csv` with one point per row, and `threshold<id>.txt` with
//! `low=`/`up=` lines). An in-memory sink supports tests without touching
//! the filesystem.

use crate::search::evaluate::ConditionResult;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A successful configuration: points in role order plus threshold bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Witness {
    /// Point coordinates, row r holding the point assigned to role r.
    pub points: Vec<Vec<f64>>,
    /// Threshold bounds, with `t_connect < t_nonconnect` guaranteed by the
    /// evaluator before anything reaches a sink.
    pub result: ConditionResult,
}

/// Destination for successful configurations.
///
/// Identifiers are assigned sequentially by the orchestrator, so sinks never
/// see the same id twice within one run.
pub trait ResultSink {
    /// Records one success under the given sequential identifier.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the record could not be written; the
    /// orchestrator treats this as recoverable for that single success.
    fn record(&mut self, id: u64, witness: &Witness) -> io::Result<()>;

    /// Sink identifier for logging.
    fn sink_name(&self) -> &'static str;
}

/// Filesystem sink writing the CSV/threshold file pair per success.
#[derive(Debug, Clone)]
pub struct FsSink {
    dir: PathBuf,
}

impl FsSink {
    /// Creates a sink rooted at `dir`, creating the directory if absent.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory this sink writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn points_path(&self, id: u64) -> PathBuf {
        self.dir.join(format!("points{id}.csv"))
    }

    fn threshold_path(&self, id: u64) -> PathBuf {
        self.dir.join(format!("threshold{id}.txt"))
    }

    /// Reads a previously recorded witness back from disk.
    ///
    /// Used by round-trip tests and mirrors what the visualization reader
    /// does with the same two files.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if either file is missing or fails to parse.
    pub fn read_back(&self, id: u64) -> io::Result<Witness> {
        let invalid = |msg: String| io::Error::new(io::ErrorKind::InvalidData, msg);

        let points_text = fs::read_to_string(self.points_path(id))?;
        let points = points_text
            .lines()
            .map(|line| {
                line.split(',')
                    .map(|field| {
                        field
                            .trim()
                            .parse::<f64>()
                            .map_err(|e| invalid(format!("bad coordinate '{field}': {e}")))
                    })
                    .collect::<io::Result<Vec<f64>>>()
            })
            .collect::<io::Result<Vec<Vec<f64>>>>()?;

        let threshold_text = fs::read_to_string(self.threshold_path(id))?;
        let mut low = None;
        let mut up = None;
        for line in threshold_text.lines() {
            if let Some(value) = line.strip_prefix("low=") {
                low = Some(
                    value
                        .parse::<f64>()
                        .map_err(|e| invalid(format!("bad low bound '{value}': {e}")))?,
                );
            } else if let Some(value) = line.strip_prefix("up=") {
                up = Some(
                    value
                        .parse::<f64>()
                        .map_err(|e| invalid(format!("bad up bound '{value}': {e}")))?,
                );
            }
        }
        let (Some(t_connect), Some(t_nonconnect)) = (low, up) else {
            return Err(invalid("threshold file missing low= or up= line".to_string()));
        };

        Ok(Witness {
            points,
            result: ConditionResult {
                t_connect,
                t_nonconnect,
            },
        })
    }
}

impl ResultSink for FsSink {
    fn record(&mut self, id: u64, witness: &Witness) -> io::Result<()> {
        let mut csv = String::new();
        for point in &witness.points {
            let row: Vec<String> = point.iter().map(|c| format!("{c:.6}")).collect();
            let _ = writeln!(csv, "{}", row.join(","));
        }
        fs::write(self.points_path(id), csv)?;

        let thresholds = format!(
            "low={}\nup={}\n",
            witness.result.t_connect, witness.result.t_nonconnect
        );
        fs::write(self.threshold_path(id), thresholds)?;
        Ok(())
    }

    fn sink_name(&self) -> &'static str {
        "filesystem"
    }
}

/// In-memory sink for unit and integration tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Recorded (id, witness) pairs in arrival order.
    pub records: Vec<(u64, Witness)>,
}

impl MemorySink {
    /// Creates an empty in-memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for MemorySink {
    fn record(&mut self, id: u64, witness: &Witness) -> io::Result<()> {
        self.records.push((id, witness.clone()));
        Ok(())
    }

    fn sink_name(&self) -> &'static str {
        "memory"
    }
}
