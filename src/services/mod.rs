pub mod aggregate;
pub mod day_sampler;
pub mod histogram;
pub mod percentiles;
pub mod run_store;
pub mod simulation;
pub mod simulation_types;
pub mod trial_runner;
