use crate::services::run_store::SavedRun;
use crate::services::simulation_types::{RunInputs, RunReport, SimulationResult};

pub fn sample_result(distribution: Vec<u32>) -> SimulationResult {
    SimulationResult {
        avg_daily_occupancy: 5.2,
        avg_peak: 6.5,
        max_observed: distribution.last().copied().unwrap_or(0),
        p95: distribution.last().copied().unwrap_or(0),
        distribution,
    }
}

pub fn sample_inputs() -> RunInputs {
    RunInputs {
        employee_count: 100,
        days_in_office: 3,
        absenteeism_percent: 10.0,
        trial_count: 4,
    }
}

pub fn sample_report() -> RunReport {
    RunReport {
        inputs: sample_inputs(),
        results: sample_result(vec![5, 6, 7, 8]),
    }
}

pub fn saved_run(name: &str, timestamp: &str) -> SavedRun {
    SavedRun {
        name: name.to_string(),
        timestamp: timestamp.to_string(),
        inputs: sample_inputs(),
        results: sample_result(vec![5, 6, 7, 8]),
    }
}
