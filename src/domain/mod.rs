pub mod config;
pub mod trial;
pub mod week;
