use thiserror::Error;

/// Percentile lookups on an already-sorted peak-occupancy distribution.
///
/// - percentages outside the open interval (0, 100) are a caller error;
/// - an empty distribution (no completed run) is reported separately;
/// - otherwise the answer is the element at `floor(len * percent / 100)`,
///   clamped into `[0, len - 1]`.

#[derive(Error, Debug, PartialEq)]
pub enum PercentileError {
    #[error("percentage must be strictly between 0 and 100, got {0}")]
    OutOfRange(f64),
    #[error("distribution is empty; run a simulation first")]
    EmptyDistribution,
}

/// Returns the desk count covering `percent` of simulated scenarios.
/// `sorted_peaks` must already be sorted in ascending order.
pub fn desks_for_coverage(sorted_peaks: &[u32], percent: f64) -> Result<u32, PercentileError> {
    if !(percent > 0.0 && percent < 100.0) {
        return Err(PercentileError::OutOfRange(percent));
    }
    if sorted_peaks.is_empty() {
        return Err(PercentileError::EmptyDistribution);
    }
    Ok(sorted_peaks[percentile_index(sorted_peaks.len(), percent)])
}

/// Clamped index of the `percent` percentile in a distribution of `len`
/// elements. Callers ensure `len > 0`.
pub(crate) fn percentile_index(len: usize, percent: f64) -> usize {
    let index = (len as f64 * percent / 100.0).floor() as usize;
    index.min(len.saturating_sub(1))
}
