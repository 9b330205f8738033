use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::simulation_types::{RunInputs, SimulationResult};

#[derive(Error, Debug)]
pub enum RunStoreError {
    #[error("failed to access run store: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse run store: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no saved run named \"{0}\"")]
    NotFound(String),
}

/// One persisted simulation run. The timestamp is an RFC 3339 string and
/// doubles as the record's unique, sortable key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedRun {
    pub name: String,
    pub timestamp: String,
    pub inputs: RunInputs,
    pub results: SimulationResult,
}

/// JSON-file store of saved runs.
///
/// Reads tolerate records this version cannot interpret: `load_all` skips
/// them, while `save` and `delete` write them back untouched so that a newer
/// or older record is never silently destroyed.
pub struct RunStore {
    path: PathBuf,
}

impl RunStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All readable saved runs, newest first. A run without a peak
    /// distribution cannot answer percentile queries and is ignored.
    pub fn load_all(&self) -> Result<Vec<SavedRun>, RunStoreError> {
        let mut runs: Vec<SavedRun> = self
            .read_records()?
            .into_iter()
            .filter_map(|record| serde_json::from_value::<SavedRun>(record).ok())
            .filter(|run| !run.results.distribution.is_empty())
            .collect();
        runs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(runs)
    }

    /// The newest saved run with the given name.
    pub fn find_by_name(&self, name: &str) -> Result<SavedRun, RunStoreError> {
        self.load_all()?
            .into_iter()
            .find(|run| run.name == name)
            .ok_or_else(|| RunStoreError::NotFound(name.to_string()))
    }

    pub fn save(&self, run: &SavedRun) -> Result<(), RunStoreError> {
        let mut records = self.read_records()?;
        records.push(serde_json::to_value(run)?);
        self.write_records(&records)
    }

    /// Removes the run with the given timestamp key. Returns whether a
    /// record was actually removed.
    pub fn delete(&self, timestamp: &str) -> Result<bool, RunStoreError> {
        let records = self.read_records()?;
        let before = records.len();
        let kept: Vec<serde_json::Value> = records
            .into_iter()
            .filter(|record| {
                record
                    .get("timestamp")
                    .and_then(|value| value.as_str())
                    .is_none_or(|value| value != timestamp)
            })
            .collect();

        let removed = before != kept.len();
        if removed {
            self.write_records(&kept)?;
        }
        Ok(removed)
    }

    fn read_records(&self) -> Result<Vec<serde_json::Value>, RunStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn write_records(&self, records: &[serde_json::Value]) -> Result<(), RunStoreError> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
