use rand::Rng;

use crate::domain::config::SimulationConfig;
use crate::domain::trial::TrialOutcome;
use crate::domain::week::{DAYS_PER_WEEK, day_index};
use crate::services::day_sampler::sample_office_days;

/// Simulates one week: every employee gets a random set of scheduled days,
/// then shows up on each of them unless an independent draw lands below the
/// absenteeism rate. Scheduling and attendance stay separate draws on
/// purpose; collapsing them into one probability would change the variance
/// of the peak distribution.
pub(crate) fn run_trial<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> TrialOutcome {
    let mut daily_counts = [0u32; DAYS_PER_WEEK];

    for _ in 0..config.employee_count {
        for day in sample_office_days(config.days_in_office, rng) {
            if rng.r#gen::<f64>() >= config.absenteeism_rate {
                daily_counts[day_index(day)] += 1;
            }
        }
    }

    TrialOutcome::from_daily_counts(daily_counts)
}
