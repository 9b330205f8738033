use crate::domain::trial::TrialOutcome;
use crate::services::percentiles::percentile_index;
use crate::services::simulation_types::SimulationResult;

/// Folds trial outcomes into running sums and the growing peak distribution.
/// Pure accumulation; the distribution is only sorted once, in `finish`.
pub(crate) struct DistributionAggregator {
    peaks: Vec<u32>,
    peak_total: f64,
    daily_total: f64,
}

impl DistributionAggregator {
    pub(crate) fn with_capacity(trial_count: usize) -> Self {
        Self {
            peaks: Vec::with_capacity(trial_count),
            peak_total: 0.0,
            daily_total: 0.0,
        }
    }

    pub(crate) fn record(&mut self, outcome: &TrialOutcome) {
        self.peaks.push(outcome.peak_occupancy);
        self.peak_total += f64::from(outcome.peak_occupancy);
        self.daily_total += outcome.average_daily_occupancy;
    }

    /// Sorts the distribution ascending and derives the summary statistics.
    /// Callers ensure at least one trial was recorded.
    pub(crate) fn finish(mut self) -> SimulationResult {
        self.peaks.sort_unstable();
        let trials = self.peaks.len();
        let max_observed = self.peaks.last().copied().unwrap_or(0);
        let p95 = self
            .peaks
            .get(percentile_index(trials, 95.0))
            .copied()
            .unwrap_or(0);

        SimulationResult {
            avg_daily_occupancy: self.daily_total / trials as f64,
            avg_peak: self.peak_total / trials as f64,
            max_observed,
            p95,
            distribution: self.peaks,
        }
    }
}
