mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use std::io;

use chrono::{SecondsFormat, Utc};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::report_format::{format_progress, format_run_report, format_saved_run_line};
use crate::domain::config::SimulationConfig;
use crate::services::histogram::write_histogram_png;
use crate::services::percentiles::desks_for_coverage;
use crate::services::run_store::{RunStore, SavedRun};
use crate::services::simulation::{CancelToken, run_simulation, run_simulation_with_rng};
use crate::services::simulation_types::{ProgressSnapshot, RunInputs, RunReport};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    match args.command {
        Commands::Run {
            employees,
            days_in_office,
            absenteeism,
            trials,
            output,
            chunk_size,
            seed,
            save_as,
            store,
        } => {
            let config = SimulationConfig {
                employee_count: employees,
                absenteeism_rate: absenteeism / 100.0,
                trial_count: trials,
                days_in_office,
            };

            // Ctrl-C stops the run at the next batch boundary.
            let cancel = CancelToken::new();
            let ctrl_c_token = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    ctrl_c_token.cancel();
                }
            });

            let on_progress = |snapshot: ProgressSnapshot| {
                eprint!("\r{}", format_progress(&snapshot));
            };

            let results = if let Some(seed) = seed {
                let mut rng = StdRng::seed_from_u64(seed);
                run_simulation_with_rng(&config, chunk_size, &cancel, on_progress, &mut rng).await
            } else {
                run_simulation(&config, chunk_size, &cancel, on_progress).await
            };
            eprintln!();

            let results = match results {
                Ok(results) => results,
                Err(e) => {
                    eprintln!("Failed to run simulation: {e}");
                    return;
                }
            };

            let report = RunReport {
                inputs: RunInputs {
                    employee_count: employees,
                    days_in_office,
                    absenteeism_percent: absenteeism,
                    trial_count: trials,
                },
                results,
            };

            println!("{}", format_run_report(&report));
            println!();

            let histogram_path = format!("{output}.png");
            if let Err(e) = write_histogram_png(&histogram_path, &report.results.distribution) {
                eprintln!("Failed to write histogram: {e:?}");
                return;
            }

            let yaml = match serde_yaml::to_string(&report) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Failed to serialize simulation output: {e:?}");
                    return;
                }
            };
            if let Err(e) = tokio::fs::write(&output, yaml).await {
                eprintln!("Failed to write simulation output: {e:?}");
                return;
            }
            println!("Simulation result written to {output}");
            println!("Simulation histogram written to {histogram_path}");

            if let Some(name) = save_as {
                let run = SavedRun {
                    name: name.clone(),
                    timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                    inputs: report.inputs.clone(),
                    results: report.results.clone(),
                };
                match RunStore::new(&store).save(&run) {
                    Ok(()) => println!("Simulation saved as \"{name}\""),
                    Err(e) => eprintln!("Failed to save simulation: {e:?}"),
                }
            }
        }
        Commands::Percentile {
            name,
            percent,
            store,
        } => {
            let run = match RunStore::new(&store).find_by_name(&name) {
                Ok(run) => run,
                Err(e) => {
                    eprintln!("Failed to load saved run: {e}");
                    return;
                }
            };
            match desks_for_coverage(&run.results.distribution, percent) {
                Ok(desks) => {
                    println!("Desks covering {percent}% of scenarios for \"{name}\": {desks}");
                }
                Err(e) => eprintln!("Invalid percentile request: {e}"),
            }
        }
        Commands::List { store } => match RunStore::new(&store).load_all() {
            Ok(runs) => {
                if runs.is_empty() {
                    println!("No saved simulations found.");
                } else {
                    for run in runs {
                        println!("{}", format_saved_run_line(&run));
                    }
                }
            }
            Err(e) => eprintln!("Failed to read run store: {e}"),
        },
        Commands::Delete { timestamp, store } => match RunStore::new(&store).delete(&timestamp) {
            Ok(true) => println!("Deleted saved run {timestamp}"),
            Ok(false) => eprintln!("No saved run with timestamp {timestamp}"),
            Err(e) => eprintln!("Failed to delete saved run: {e}"),
        },
        Commands::Completions { shell } => {
            let mut cmd = CliArgs::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }
}
