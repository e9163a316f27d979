// ABOUTME: Personal-record service that fetches stats snapshots and classifies sets
// ABOUTME: Maps repository failures and timeouts to an absent snapshot instead of an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Record Service
//!
//! The only async boundary of the classification flow. A flaky stats store
//! must never block workout logging, so every fetch failure (error, timeout)
//! degrades to "no snapshot", which yields the baseline record.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use ironlog_core::constants::defaults;
use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::{ExerciseStatsSnapshot, Observation};
use ironlog_intelligence::{PrClassification, RecordClassifier, StatsRepository};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::AppConfig;

/// Classifies sets against snapshots read from a [`StatsRepository`]
#[derive(Clone)]
pub struct RecordService {
    repository: Arc<dyn StatsRepository>,
    fetch_timeout: Duration,
}

impl RecordService {
    /// Service with the default fetch timeout
    #[must_use]
    pub fn new(repository: Arc<dyn StatsRepository>) -> Self {
        Self {
            repository,
            fetch_timeout: Duration::from_millis(defaults::STATS_FETCH_TIMEOUT_MS),
        }
    }

    /// Service configured from `AppConfig`
    #[must_use]
    pub fn from_config(repository: Arc<dyn StatsRepository>, config: &AppConfig) -> Self {
        Self::new(repository).with_fetch_timeout(config.stats_fetch_timeout)
    }

    /// Override the fetch timeout
    #[must_use]
    pub const fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Fetch a snapshot, treating errors and timeouts as "no snapshot"
    pub async fn snapshot_or_absent(&self, exercise_id: &str) -> Option<ExerciseStatsSnapshot> {
        let repository = self.repository.name();
        let fetched = timeout(self.fetch_timeout, self.repository.fetch_snapshot(exercise_id))
            .await
            .unwrap_or_else(|_| {
                Err(AppError::external_unavailable(
                    repository,
                    format!("no answer within {:?}", self.fetch_timeout),
                ))
            });

        match fetched {
            Ok(snapshot) => snapshot,
            Err(error) => {
                warn!(
                    exercise_id,
                    repository,
                    code = ?error.code,
                    error = %error,
                    "stats fetch failed, treating as no history"
                );
                None
            }
        }
    }

    /// Classify a single set
    ///
    /// Warmups and sets with no contribution are never records and skip the fetch.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the set has no exercise identity
    pub async fn classify_observation(
        &self,
        observation: &Observation,
    ) -> AppResult<PrClassification> {
        ensure_identity(observation)?;
        if !observation.qualifies() {
            return Ok(PrClassification::none());
        }

        let snapshot = self.snapshot_or_absent(&observation.exercise_id).await;
        Ok(RecordClassifier::classify(
            observation.weight,
            observation.reps,
            snapshot.as_ref(),
        ))
    }

    /// Classify every set of a workout in order
    ///
    /// Each exercise's snapshot is fetched at most once, and every set is
    /// compared with that same pre-workout snapshot. Identity is checked for
    /// all sets before any fetch happens.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any set has no exercise identity
    pub async fn classify_workout(
        &self,
        observations: &[Observation],
    ) -> AppResult<Vec<PrClassification>> {
        for observation in observations {
            ensure_identity(observation)?;
        }

        let mut snapshots: HashMap<&str, Option<ExerciseStatsSnapshot>> = HashMap::new();
        let mut verdicts = Vec::with_capacity(observations.len());

        for observation in observations {
            if !observation.qualifies() {
                verdicts.push(PrClassification::none());
                continue;
            }

            let exercise_id = observation.exercise_id.as_str();
            let snapshot = match snapshots.entry(exercise_id) {
                Entry::Occupied(cached) => cached.into_mut(),
                Entry::Vacant(slot) => slot.insert(self.snapshot_or_absent(exercise_id).await),
            };

            verdicts.push(RecordClassifier::classify(
                observation.weight,
                observation.reps,
                snapshot.as_ref(),
            ));
        }

        debug!(
            sets = observations.len(),
            exercises = snapshots.len(),
            records = verdicts.iter().filter(|v| v.is_pr).count(),
            "workout classified"
        );
        Ok(verdicts)
    }
}

fn ensure_identity(observation: &Observation) -> AppResult<()> {
    if observation.has_identity() {
        Ok(())
    } else {
        Err(AppError::invalid_input(
            "exerciseId is required to classify a set",
        ))
    }
}
