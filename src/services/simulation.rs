use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::domain::config::{ConfigError, SimulationConfig};
use crate::services::aggregate::DistributionAggregator;
use crate::services::simulation_types::{ProgressSnapshot, SimulationResult};
use crate::services::trial_runner::run_trial;

/// Trials per batch between progress reports and yields.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("simulation cancelled")]
    Cancelled,
}

/// Cooperative cancellation flag, checked at every batch boundary. A
/// cancelled run discards its partial results instead of returning a
/// truncated distribution.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Runs the full simulation with a fresh entropy-seeded generator.
pub async fn run_simulation<F>(
    config: &SimulationConfig,
    chunk_size: usize,
    cancel: &CancelToken,
    on_progress: F,
) -> Result<SimulationResult, SimulationError>
where
    F: FnMut(ProgressSnapshot),
{
    let mut rng = StdRng::from_entropy();
    run_simulation_with_rng(config, chunk_size, cancel, on_progress, &mut rng).await
}

/// Runs `config.trial_count` trials in batches of `chunk_size`, reporting
/// progress after each batch and yielding back to the host scheduler before
/// starting the next one, so that the surrounding task stays responsive.
///
/// The remaining-time estimate is a linear extrapolation of the per-trial
/// cost observed since the start of the run.
pub async fn run_simulation_with_rng<R, F>(
    config: &SimulationConfig,
    chunk_size: usize,
    cancel: &CancelToken,
    mut on_progress: F,
    rng: &mut R,
) -> Result<SimulationResult, SimulationError>
where
    R: Rng + ?Sized,
    F: FnMut(ProgressSnapshot),
{
    config.validate()?;

    let chunk_size = chunk_size.max(1);
    let started = Instant::now();
    let mut aggregator = DistributionAggregator::with_capacity(config.trial_count);
    let mut completed = 0usize;

    while completed < config.trial_count {
        if cancel.is_cancelled() {
            return Err(SimulationError::Cancelled);
        }

        let limit = (completed + chunk_size).min(config.trial_count);
        for _ in completed..limit {
            aggregator.record(&run_trial(config, rng));
        }
        completed = limit;

        let elapsed_millis = started.elapsed().as_secs_f64() * 1000.0;
        let per_trial = elapsed_millis / completed as f64;
        on_progress(ProgressSnapshot {
            fraction_complete: completed as f64 / config.trial_count as f64,
            estimated_remaining_millis: per_trial * (config.trial_count - completed) as f64,
        });

        tokio::task::yield_now().await;
    }

    Ok(aggregator.finish())
}
