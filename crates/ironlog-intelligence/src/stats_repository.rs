// ABOUTME: Read-only contract for the external per-exercise stats store
// ABOUTME: Async trait consumed by record classification plus an in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Stats Repository
//!
//! The historical aggregate (`exercise_id -> ExerciseStatsSnapshot`) is owned
//! and mutated by an external store after each accepted workout write. The
//! intelligence layer only reads it:
//!
//! - it never writes to the store,
//! - it accepts snapshots that are stale relative to sets submitted concurrently,
//! - callers turn any fetch failure into an absent snapshot (baseline record)
//!   instead of failing classification.

use std::collections::HashMap;

use async_trait::async_trait;
use ironlog_core::errors::AppResult;
use ironlog_core::models::ExerciseStatsSnapshot;

/// Keyed read access to per-exercise stats snapshots
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Fetch the snapshot for an exercise, `Ok(None)` when there is no history
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read (network, timeout, corrupt data)
    async fn fetch_snapshot(&self, exercise_id: &str) -> AppResult<Option<ExerciseStatsSnapshot>>;

    /// Short name used in log events
    fn name(&self) -> &'static str {
        "stats_repository"
    }
}

/// Fixture-style repository holding snapshots in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatsRepository {
    snapshots: HashMap<String, ExerciseStatsSnapshot>,
}

impl InMemoryStatsRepository {
    /// Empty repository (every exercise has no history)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snapshot keyed by its `exercise_id`
    #[must_use]
    pub fn with_snapshot(mut self, snapshot: ExerciseStatsSnapshot) -> Self {
        self.snapshots.insert(snapshot.exercise_id.clone(), snapshot);
        self
    }

    /// Build from `(exercise_id, snapshot)` pairs; the key wins over the snapshot's own id
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (String, ExerciseStatsSnapshot)>) -> Self {
        let snapshots = entries
            .into_iter()
            .map(|(exercise_id, mut snapshot)| {
                snapshot.exercise_id.clone_from(&exercise_id);
                (exercise_id, snapshot)
            })
            .collect();
        Self { snapshots }
    }

    /// Number of exercises with a snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no snapshot is held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[async_trait]
impl StatsRepository for InMemoryStatsRepository {
    async fn fetch_snapshot(&self, exercise_id: &str) -> AppResult<Option<ExerciseStatsSnapshot>> {
        Ok(self.snapshots.get(exercise_id).cloned())
    }

    fn name(&self) -> &'static str {
        "in_memory"
    }
}
