use serde::{Deserialize, Serialize};

/// Final outcome of a completed run. The engine hands it to the caller and
/// keeps no reference.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Peak occupancy of every trial, sorted ascending.
    pub distribution: Vec<u32>,
    pub avg_daily_occupancy: f64,
    pub avg_peak: f64,
    pub max_observed: u32,
    /// Desk count at the 95th percentile of the peak distribution.
    pub p95: u32,
}

/// Transient progress report emitted after each batch of trials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    /// Completed fraction of all trials, in [0, 1].
    pub fraction_complete: f64,
    /// Linear extrapolation from the per-trial cost observed so far.
    pub estimated_remaining_millis: f64,
}

/// Inputs of a run as they are reported and persisted, with absenteeism as
/// the user-facing percentage rather than the internal rate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunInputs {
    pub employee_count: u32,
    pub days_in_office: u8,
    pub absenteeism_percent: f64,
    pub trial_count: usize,
}

/// Serialized report written next to the histogram after a run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunReport {
    pub inputs: RunInputs,
    pub results: SimulationResult,
}
