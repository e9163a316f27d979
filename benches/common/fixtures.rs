// ABOUTME: Benchmark test fixtures for generating realistic strength-training history
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic strength-set fixtures.

use chrono::{DateTime, Duration, TimeZone, Utc};
use ironlog::models::{ExerciseStatsSnapshot, Observation, SetKind};

const EXERCISES: [(&str, &str); 4] = [
    ("squat", "legs"),
    ("bench_press", "chest"),
    ("deadlift", "back"),
    ("overhead_press", "shoulders"),
];

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// A few weeks of training
    Small,
    /// About a year of training
    Medium,
    /// Several years of training
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 100,
            Self::Medium => 2_000,
            Self::Large => 20_000,
        }
    }
}

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 1, 3, 8, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Generate `count` sets spread over consecutive training days
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#[must_use]
pub fn generate_observations(count: usize) -> Vec<Observation> {
    let base = base_date();
    (0..count)
        .map(|index| {
            let (exercise, tag) = EXERCISES[index % EXERCISES.len()];
            let weight = 40.0 + ((index * 37) % 120) as f64 + 2.5 * (index % 2) as f64;
            let reps = 1 + ((index * 7) % 12) as u32;
            let day = (index / 12) as i64;
            let set_kind = if index % 10 == 0 {
                SetKind::Warmup
            } else {
                SetKind::Normal
            };

            Observation::new(exercise, weight, reps, base + Duration::days(day))
                .with_tags([tag])
                .with_set_kind(set_kind)
        })
        .collect()
}

/// Snapshot with a populated reps-at-weight table
#[must_use]
pub fn generate_snapshot(exercise_id: &str) -> ExerciseStatsSnapshot {
    (0..50).fold(
        ExerciseStatsSnapshot::new(exercise_id)
            .with_best_estimate(150.0)
            .with_total_observations(500),
        |snapshot, step| snapshot.with_reps_at_weight(40.0 + f64::from(step) * 2.5, 5),
    )
}
