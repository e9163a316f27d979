// ABOUTME: Observation ingestion from the external workout-log store's JSON export
// ABOUTME: Converts raw records to validated observations, failing fast on missing identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::{Observation, ObservationRecord};
use tokio::fs;
use tracing::{debug, info};

/// Parse a JSON array of observation records
///
/// Non-positive weights and reps are accepted (they carry no contribution);
/// a missing `exerciseId` or an unparseable `performedAt` rejects the batch.
///
/// # Errors
///
/// Returns `SerializationError` for malformed JSON, `InvalidInput` for a
/// record without exercise identity, `InvalidFormat` for bad dates or weights
pub fn parse_observations(json: &str) -> AppResult<Vec<Observation>> {
    let records: Vec<ObservationRecord> = serde_json::from_str(json)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Observation::try_from(record).map_err(|e| AppError {
                message: format!("record {index}: {}", e.message),
                ..e
            })
        })
        .collect()
}

/// Read and parse an observation export file
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read, otherwise the errors of
/// [`parse_observations`]
pub async fn load_observations(path: impl AsRef<Path>) -> AppResult<Vec<Observation>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading observations");

    let json = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    let observations = parse_observations(&json)?;

    info!(path = %path.display(), count = observations.len(), "observations loaded");
    Ok(observations)
}
