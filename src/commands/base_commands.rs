use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::services::simulation::DEFAULT_CHUNK_SIZE;

/// Default path of the saved-run store, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "saved-simulations.json";

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a Monte Carlo desk-demand simulation
    Run {
        /// Number of employees
        #[arg(short, long)]
        employees: u32,
        /// Target days in office per employee per week (0-5)
        #[arg(short, long)]
        days_in_office: u8,
        /// Absenteeism rate as a percentage (0-100)
        #[arg(short, long, default_value_t = 0.0)]
        absenteeism: f64,
        /// Number of simulated weeks
        #[arg(short, long, default_value_t = 10000)]
        trials: usize,
        /// Output YAML file; the histogram PNG lands next to it
        #[arg(short, long)]
        output: String,
        /// Trials per batch between progress updates
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        /// Also save the run under this name in the run store
        #[arg(long)]
        save_as: Option<String>,
        /// Path to the saved-run store
        #[arg(long, default_value = DEFAULT_STORE_PATH)]
        store: String,
    },
    /// Query a saved run for the desks covering a percentage of scenarios
    Percentile {
        /// Name of the saved run
        #[arg(short, long)]
        name: String,
        /// Coverage percentage, strictly between 0 and 100
        #[arg(short, long)]
        percent: f64,
        /// Path to the saved-run store
        #[arg(long, default_value = DEFAULT_STORE_PATH)]
        store: String,
    },
    /// List saved runs, newest first
    List {
        /// Path to the saved-run store
        #[arg(long, default_value = DEFAULT_STORE_PATH)]
        store: String,
    },
    /// Delete a saved run by its timestamp key
    Delete {
        /// Timestamp of the run to delete
        #[arg(short, long)]
        timestamp: String,
        /// Path to the saved-run store
        #[arg(long, default_value = DEFAULT_STORE_PATH)]
        store: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_defaults_trials_chunk_size_and_store() {
        let args = CliArgs::parse_from([
            "deskcast",
            "run",
            "-e",
            "250",
            "-d",
            "3",
            "-o",
            "out.yaml",
        ]);

        if let Commands::Run {
            employees,
            days_in_office,
            absenteeism,
            trials,
            chunk_size,
            seed,
            save_as,
            store,
            ..
        } = args.command
        {
            assert_eq!(employees, 250);
            assert_eq!(days_in_office, 3);
            assert_eq!(absenteeism, 0.0);
            assert_eq!(trials, 10000);
            assert_eq!(chunk_size, DEFAULT_CHUNK_SIZE);
            assert_eq!(seed, None);
            assert_eq!(save_as, None);
            assert_eq!(store, DEFAULT_STORE_PATH);
        } else {
            panic!("expected run command");
        }
    }

    #[test]
    fn percentile_parses_name_and_percent() {
        let args = CliArgs::parse_from([
            "deskcast",
            "percentile",
            "-n",
            "Pilot",
            "-p",
            "97.5",
        ]);

        if let Commands::Percentile { name, percent, store } = args.command {
            assert_eq!(name, "Pilot");
            assert_eq!(percent, 97.5);
            assert_eq!(store, DEFAULT_STORE_PATH);
        } else {
            panic!("expected percentile command");
        }
    }
}
