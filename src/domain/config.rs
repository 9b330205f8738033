use thiserror::Error;

use crate::domain::week::DAYS_PER_WEEK;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("employee count must be greater than zero")]
    InvalidEmployeeCount,
    #[error("trial count must be greater than zero")]
    InvalidTrialCount,
    #[error("absenteeism rate must be at least 0 and below 1, got {0}")]
    InvalidAbsenteeismRate(f64),
    #[error("days in office must be between 0 and 5, got {0}")]
    InvalidDaysInOffice(u8),
}

/// Inputs of one simulation run. Immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub employee_count: u32,
    /// Probability that a scheduled employee does not show up on a given day.
    pub absenteeism_rate: f64,
    /// Number of independent simulated weeks.
    pub trial_count: usize,
    /// Target scheduled days per employee per week, 0 through 5.
    pub days_in_office: u8,
}

impl SimulationConfig {
    /// Rejects an unusable config before any trial executes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.employee_count == 0 {
            return Err(ConfigError::InvalidEmployeeCount);
        }
        if self.trial_count == 0 {
            return Err(ConfigError::InvalidTrialCount);
        }
        if !(0.0..1.0).contains(&self.absenteeism_rate) {
            return Err(ConfigError::InvalidAbsenteeismRate(self.absenteeism_rate));
        }
        if self.days_in_office as usize > DAYS_PER_WEEK {
            return Err(ConfigError::InvalidDaysInOffice(self.days_in_office));
        }
        Ok(())
    }
}
