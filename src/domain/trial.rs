use crate::domain::week::DAYS_PER_WEEK;

/// Result of one simulated week across all employees.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialOutcome {
    /// Attendance count per weekday, Monday first.
    pub daily_counts: [u32; DAYS_PER_WEEK],
    /// Highest single-day attendance of the week.
    pub peak_occupancy: u32,
    pub average_daily_occupancy: f64,
}

impl TrialOutcome {
    pub fn from_daily_counts(daily_counts: [u32; DAYS_PER_WEEK]) -> Self {
        let peak_occupancy = daily_counts.iter().copied().max().unwrap_or(0);
        let total: u32 = daily_counts.iter().sum();
        Self {
            daily_counts,
            peak_occupancy,
            average_daily_occupancy: f64::from(total) / DAYS_PER_WEEK as f64,
        }
    }
}
