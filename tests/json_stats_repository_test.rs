// ABOUTME: Integration tests for the JSON-file stats repository
// ABOUTME: Exercises snapshot lookup, weight-key canonicalization, and missing-file fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{squat, write_fixture};
use ironlog::errors::ErrorCode;
use ironlog::intelligence::{PrClassification, PrKind, StatsRepository};
use ironlog::services::RecordService;
use ironlog::stats::JsonFileStatsRepository;

const STATS_EXPORT: &str = r#"{
    "squat": {
        "bestEstimate": 120.0,
        "bestRepsAtWeight": {"100": 5, "105.0": 5},
        "totalObservations": 42
    },
    "bench_press": {
        "bestEstimate": 0,
        "bestRepsAtWeight": {},
        "totalObservations": 0
    }
}"#;

#[tokio::test]
async fn test_fetch_known_exercise() {
    let (_dir, path) = write_fixture("stats.json", STATS_EXPORT);
    let repository = JsonFileStatsRepository::new(&path);

    let snapshot = repository.fetch_snapshot("squat").await.unwrap().unwrap();

    assert_eq!(snapshot.exercise_id, "squat");
    assert_eq!(snapshot.total_observations, 42);
    assert_eq!(snapshot.best_reps_at(100.0), 5);
    assert_eq!(snapshot.best_reps_at(105.0), 5);
    assert_eq!(snapshot.best_reps_at(102.5), 0);
    assert_eq!(repository.name(), "json_file");
}

#[tokio::test]
async fn test_fetch_unknown_exercise_is_absent() {
    let (_dir, path) = write_fixture("stats.json", STATS_EXPORT);
    let repository = JsonFileStatsRepository::new(&path);

    assert!(repository.fetch_snapshot("deadlift").await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_file_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let repository = JsonFileStatsRepository::new(dir.path().join("absent.json"));

    let err = repository.fetch_snapshot("squat").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(err.resource_id.is_some());
}

#[tokio::test]
async fn test_load_all_into_memory() {
    let (_dir, path) = write_fixture("stats.json", STATS_EXPORT);

    let in_memory = JsonFileStatsRepository::new(&path).load_all().await.unwrap();

    assert_eq!(in_memory.len(), 2);
    let bench = in_memory.fetch_snapshot("bench_press").await.unwrap().unwrap();
    assert!(!bench.has_history());
}

#[tokio::test]
async fn test_service_over_file_classifies_reps_record() {
    let (_dir, path) = write_fixture("stats.json", STATS_EXPORT);
    let service = RecordService::new(Arc::new(JsonFileStatsRepository::new(&path)));

    let verdict = service.classify_observation(&squat(100.0, 6)).await.unwrap();

    assert_eq!(verdict.kind, PrKind::Reps);
    assert_eq!(verdict.diff_label, "+1 reps (100kg)");
}

#[tokio::test]
async fn test_service_over_broken_file_is_baseline() {
    let (_dir, path) = write_fixture("stats.json", "{ not json");
    let service = RecordService::new(Arc::new(JsonFileStatsRepository::new(&path)));

    let verdict = service.classify_observation(&squat(105.0, 6)).await.unwrap();

    assert_eq!(verdict, PrClassification::baseline());
}
