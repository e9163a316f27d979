// ABOUTME: IronLog CLI - command-line access to estimation, record detection, and progression
// ABOUTME: Reads JSON exports of the workout log and stats store and prints JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Estimated single-rep max
//! ironlog-cli estimate --weight 100 --reps 5
//!
//! # Classify a saved workout against the stats export
//! ironlog-cli classify --observations workout.json --stats stats.json
//!
//! # Weekly volume trend for one exercise
//! ironlog-cli progress --observations history.json --exercise squat
//!
//! # Monthly reps trend for a muscle group
//! ironlog-cli progress --observations history.json --muscle-group legs \
//!     --granularity month --metric reps
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser, Subcommand};
use ironlog::config::AppConfig;
use ironlog::errors::AppResult;
use ironlog::intelligence::{Granularity, TrendMetric};
use ironlog::logging::LoggingConfig;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "ironlog-cli",
    about = "IronLog strength-training intelligence CLI",
    long_about = "Estimate single-rep maxes, detect personal records, and compute progression trends from JSON exports."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the estimated single-rep max for a set
    Estimate {
        /// Load lifted (kg)
        #[arg(long)]
        weight: f64,

        /// Completed repetitions
        #[arg(long)]
        reps: u32,
    },

    /// Classify every set of a workout as a personal record or not
    Classify {
        /// JSON array of observations
        #[arg(long)]
        observations: PathBuf,

        /// JSON object of stats snapshots keyed by exercise id
        #[arg(long)]
        stats: PathBuf,
    },

    /// Aggregate history into a progression series with a trend line
    #[command(group(ArgGroup::new("filter").required(true).args(["exercise", "muscle_group"])))]
    Progress {
        /// JSON array of observations
        #[arg(long)]
        observations: PathBuf,

        /// Bucket size (week or month)
        #[arg(long)]
        granularity: Option<Granularity>,

        /// Keep sets of this exercise
        #[arg(long)]
        exercise: Option<String>,

        /// Keep sets tagged with this muscle group
        #[arg(long)]
        muscle_group: Option<String>,

        /// Trended metric (volume or reps)
        #[arg(long)]
        metric: Option<TrendMetric>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(code = ?error.code, error = %error, "ironlog-cli failed");
            commands::print_error(error);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = AppConfig::from_env()?;
    debug!(config = %config.summary(), "ironlog-cli starting");

    match cli.command {
        Command::Estimate { weight, reps } => commands::estimate(weight, reps),
        Command::Classify {
            observations,
            stats,
        } => commands::classify(&config, &observations, &stats).await,
        Command::Progress {
            observations,
            granularity,
            exercise,
            muscle_group,
            metric,
        } => {
            let options = commands::ProgressOptions {
                granularity: granularity.unwrap_or(config.default_granularity),
                metric: metric.unwrap_or(config.trend_metric),
                exercise,
                muscle_group,
            };
            commands::progress(&observations, options).await
        }
    }
}
