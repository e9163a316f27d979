// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides observation builders, stats fixtures, and scripted stats repositories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `ironlog`

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use ironlog::errors::{AppError, AppResult};
use ironlog::intelligence::StatsRepository;
use ironlog::models::{ExerciseStatsSnapshot, Observation};
use tempfile::TempDir;
use tokio::time::sleep;

/// Midday UTC on the given date
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap()
}

/// Normal squat set on 2024-03-11
pub fn squat(weight: f64, reps: u32) -> Observation {
    Observation::new("squat", weight, reps, at(2024, 3, 11)).with_tags(["legs"])
}

/// Squat history: best estimate 120, 5 reps at 100 and 105
pub fn squat_snapshot() -> ExerciseStatsSnapshot {
    ExerciseStatsSnapshot::new("squat")
        .with_best_estimate(120.0)
        .with_reps_at_weight(100.0, 5)
        .with_reps_at_weight(105.0, 5)
        .with_total_observations(42)
}

/// Write `contents` to `name` inside a fresh temporary directory
pub fn write_fixture(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

/// Repository whose every fetch fails
pub struct FailingStatsRepository;

#[async_trait]
impl StatsRepository for FailingStatsRepository {
    async fn fetch_snapshot(&self, exercise_id: &str) -> AppResult<Option<ExerciseStatsSnapshot>> {
        Err(AppError::external_unavailable(
            "stats_store",
            format!("offline while fetching {exercise_id}"),
        ))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Repository that answers only after `delay`
pub struct SlowStatsRepository {
    pub delay: Duration,
    pub snapshot: ExerciseStatsSnapshot,
}

#[async_trait]
impl StatsRepository for SlowStatsRepository {
    async fn fetch_snapshot(&self, _exercise_id: &str) -> AppResult<Option<ExerciseStatsSnapshot>> {
        sleep(self.delay).await;
        Ok(Some(self.snapshot.clone()))
    }
}

/// Repository counting how often it is asked
pub struct CountingStatsRepository {
    pub snapshot: ExerciseStatsSnapshot,
    pub fetches: AtomicUsize,
}

impl CountingStatsRepository {
    pub fn new(snapshot: ExerciseStatsSnapshot) -> Self {
        Self {
            snapshot,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsRepository for CountingStatsRepository {
    async fn fetch_snapshot(&self, exercise_id: &str) -> AppResult<Option<ExerciseStatsSnapshot>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok((exercise_id == self.snapshot.exercise_id).then(|| self.snapshot.clone()))
    }
}
