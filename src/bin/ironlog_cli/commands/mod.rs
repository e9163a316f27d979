// ABOUTME: Command implementations for ironlog-cli
// ABOUTME: Each command loads its inputs, runs the engine, and prints JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;

use ironlog::config::AppConfig;
use ironlog::errors::{AppError, AppResult, ErrorResponse};
use ironlog::ingest::load_observations;
use ironlog::intelligence::{
    estimate_one_rep_max, AggregationFilter, Granularity, ProgressionAnalyzer, TrendMetric,
};
use ironlog::services::RecordService;
use ironlog::stats::JsonFileStatsRepository;
use serde::Serialize;
use serde_json::json;
use tracing::info;

/// Options of the `progress` command after config defaults are applied
pub struct ProgressOptions {
    pub granularity: Granularity,
    pub metric: TrendMetric,
    pub exercise: Option<String>,
    pub muscle_group: Option<String>,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the JSON error envelope on stdout
pub fn print_error(error: AppError) {
    let response = ErrorResponse::from(error);
    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{}", response.error.message),
    }
}

pub fn estimate(weight: f64, reps: u32) -> AppResult<()> {
    let estimate = estimate_one_rep_max(weight, reps);
    print_json(&json!({
        "weight": weight,
        "reps": reps,
        "estimate": estimate,
    }))
}

pub async fn classify(config: &AppConfig, observations: &Path, stats: &Path) -> AppResult<()> {
    let observations = load_observations(observations).await?;
    let repository = Arc::new(JsonFileStatsRepository::new(stats));
    let service = RecordService::from_config(repository, config);

    let verdicts = service.classify_workout(&observations).await?;
    let rows: Vec<_> = observations
        .iter()
        .zip(&verdicts)
        .map(|(observation, verdict)| {
            json!({
                "exerciseId": observation.exercise_id,
                "weight": observation.weight,
                "reps": observation.reps,
                "classification": verdict,
            })
        })
        .collect();

    info!(
        sets = rows.len(),
        records = verdicts.iter().filter(|v| v.is_pr).count(),
        "workout classified"
    );
    print_json(&rows)
}

pub async fn progress(observations: &Path, options: ProgressOptions) -> AppResult<()> {
    let filter = match (options.exercise, options.muscle_group) {
        (Some(exercise), None) => AggregationFilter::exercise(exercise),
        (None, Some(muscle_group)) => AggregationFilter::muscle_group(muscle_group),
        _ => {
            return Err(AppError::invalid_input(
                "exactly one of --exercise or --muscle-group is required",
            ))
        }
    };

    let observations = load_observations(observations).await?;
    let report =
        ProgressionAnalyzer::analyze(&observations, options.granularity, &filter, options.metric)?;
    print_json(&report)
}
