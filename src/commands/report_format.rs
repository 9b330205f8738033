use crate::services::run_store::SavedRun;
use crate::services::simulation_types::{ProgressSnapshot, RunReport};

pub fn format_run_report(report: &RunReport) -> String {
    let mut lines = Vec::new();
    lines.push("Desk Demand Simulation".to_string());
    lines.push(format!("Employees: {}", report.inputs.employee_count));
    lines.push(format!("Days in office: {}", report.inputs.days_in_office));
    lines.push(format!(
        "Absenteeism: {}%",
        report.inputs.absenteeism_percent
    ));
    lines.push(format!("Trials: {}", report.inputs.trial_count));
    lines.push(String::new());
    lines.push(format!(
        "Average daily occupancy: {:.1}",
        report.results.avg_daily_occupancy
    ));
    lines.push(format!(
        "Average peak occupancy: {:.1}",
        report.results.avg_peak
    ));
    lines.push(format!("Desks for 95% of weeks: {}", report.results.p95));
    lines.push(format!("Maximum observed: {}", report.results.max_observed));

    lines.join("\n")
}

/// One-line progress report, overwritten in place on stderr during a run.
pub fn format_progress(snapshot: &ProgressSnapshot) -> String {
    let percent = ((snapshot.fraction_complete * 100.0).round() as u32).min(100);
    let remaining = snapshot.estimated_remaining_millis;

    let time_part = if remaining <= 0.0 {
        "finishing up".to_string()
    } else if remaining < 1000.0 {
        "< 1s remaining".to_string()
    } else {
        format!("~{}s remaining", (remaining / 1000.0).ceil() as u64)
    };

    format!("{percent}% complete, {time_part}")
}

pub fn format_saved_run_line(run: &SavedRun) -> String {
    format!(
        "{} | {} ({} employees, {} trials)",
        run.name, run.timestamp, run.inputs.employee_count, run.inputs.trial_count
    )
}
