// ABOUTME: End-to-end tests from a JSON observation export to a progression report
// ABOUTME: Covers file loading, rejection of anonymous records, and weekly trend direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::write_fixture;
use ironlog::errors::{ErrorCode, ErrorResponse};
use ironlog::ingest::load_observations;
use ironlog::intelligence::{
    AggregationFilter, Granularity, ProgressionAnalyzer, TrendDirection, TrendMetric,
};

const HISTORY: &str = r#"[
    {"weight": 100, "reps": 5, "performedAt": "2024-03-05T18:00:00Z", "exerciseId": "squat", "categoryTags": ["legs"]},
    {"weight": 100, "reps": 5, "performedAt": "2024-03-05T18:05:00Z", "exerciseId": "squat", "categoryTags": ["legs"]},
    {"weight": 40, "reps": 10, "performedAt": "2024-03-13T17:50:00Z", "exerciseId": "squat", "categoryTags": ["legs"], "setKind": "warmup"},
    {"weight": 110, "reps": 5, "performedAt": "2024-03-13T18:00:00Z", "exerciseId": "squat", "categoryTags": ["legs"]},
    {"weight": 0, "reps": 5, "performedAt": "2024-03-13T18:10:00Z", "exerciseId": "squat", "categoryTags": ["legs"]},
    {"weight": 120, "reps": 5, "performedAt": "2024-03-20", "exerciseId": "squat", "categoryTags": ["legs"]},
    {"weight": 80, "reps": 5, "performedAt": "2024-03-20", "exerciseId": "bench_press", "categoryTags": ["chest"]}
]"#;

#[tokio::test]
async fn test_load_history_file() {
    let (_dir, path) = write_fixture("history.json", HISTORY);

    let observations = load_observations(&path).await.unwrap();

    assert_eq!(observations.len(), 7);
    assert!(observations[2].is_warmup());
    assert!(!observations[4].has_contribution());
}

#[tokio::test]
async fn test_missing_file_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_observations(dir.path().join("nope.json")).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_load_failure_renders_error_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let err = load_observations(&path).await.unwrap_err();
    let json = serde_json::to_value(ErrorResponse::from(err)).unwrap();

    assert_eq!(json["error"]["code"], "STORAGE_ERROR");
    assert_eq!(json["error"]["resourceId"], path.display().to_string());
}

#[tokio::test]
async fn test_anonymous_record_rejects_file() {
    let (_dir, path) = write_fixture(
        "history.json",
        r#"[{"weight": 100, "reps": 5, "performedAt": "2024-03-05"}]"#,
    );

    let err = load_observations(&path).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("record 0"));
}

#[tokio::test]
async fn test_weekly_volume_report_for_exercise() {
    let (_dir, path) = write_fixture("history.json", HISTORY);
    let observations = load_observations(&path).await.unwrap();

    let report = ProgressionAnalyzer::analyze(
        &observations,
        Granularity::Week,
        &AggregationFilter::exercise("squat"),
        TrendMetric::Volume,
    )
    .unwrap();

    let dates: Vec<_> = report.points.iter().map(|p| p.date.as_str()).collect();
    let labels: Vec<_> = report.points.iter().map(|p| p.label.as_str()).collect();
    let volumes: Vec<_> = report
        .points
        .iter()
        .map(|p| p.average_volume_per_set)
        .collect();
    assert_eq!(dates, ["2024-03-04", "2024-03-11", "2024-03-18"]);
    assert_eq!(labels, ["S1", "S2", "S3"]);
    assert_eq!(volumes, [500.0, 550.0, 600.0]);

    let trend = report.trend.unwrap();
    assert!((trend.slope - 50.0).abs() < 1e-9);
    assert_eq!(report.direction, TrendDirection::Improving);
    assert_eq!(report.smoothed.segments.len(), 2);
}

#[tokio::test]
async fn test_monthly_muscle_group_report_has_no_trend_for_single_month() {
    let (_dir, path) = write_fixture("history.json", HISTORY);
    let observations = load_observations(&path).await.unwrap();

    let report = ProgressionAnalyzer::analyze(
        &observations,
        Granularity::Month,
        &AggregationFilter::muscle_group("chest"),
        TrendMetric::Reps,
    )
    .unwrap();

    assert_eq!(report.points.len(), 1);
    assert_eq!(report.points[0].label, "2024-03");
    assert!(!report.has_trend());
    assert_eq!(report.direction, TrendDirection::Stable);
}
