// ABOUTME: Read-only stats repository over a JSON export of the external stats store
// ABOUTME: Re-reads the file on every fetch so external updates are picked up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::ExerciseStatsSnapshot;
use ironlog_intelligence::stats_repository::{InMemoryStatsRepository, StatsRepository};
use tokio::fs;
use tracing::debug;

/// File layout: `{"<exerciseId>": {"bestEstimate": .., "bestRepsAtWeight": {..}, "totalObservations": ..}}`
type SnapshotFile = HashMap<String, ExerciseStatsSnapshot>;

/// Stats repository backed by a JSON file that the external store exports
#[derive(Debug, Clone)]
pub struct JsonFileStatsRepository {
    path: PathBuf,
}

impl JsonFileStatsRepository {
    /// Repository reading from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the export
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> AppResult<SnapshotFile> {
        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::from(e).with_resource_id(self.path.display().to_string()))?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load the whole export into memory
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub async fn load_all(&self) -> AppResult<InMemoryStatsRepository> {
        let snapshots = self.read_file().await?;
        Ok(InMemoryStatsRepository::from_entries(snapshots))
    }
}

#[async_trait]
impl StatsRepository for JsonFileStatsRepository {
    async fn fetch_snapshot(&self, exercise_id: &str) -> AppResult<Option<ExerciseStatsSnapshot>> {
        let mut snapshots = self.read_file().await?;
        let snapshot = snapshots.remove(exercise_id).map(|mut snapshot| {
            exercise_id.clone_into(&mut snapshot.exercise_id);
            snapshot
        });

        debug!(
            path = %self.path.display(),
            exercise_id,
            found = snapshot.is_some(),
            "stats snapshot read"
        );
        Ok(snapshot)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}
