// ABOUTME: Strength-training set observation model and its JSON wire representation
// ABOUTME: Validates exercise identity and timestamps when converting from raw records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Kind of set as logged by the athlete
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetKind {
    /// Regular working set
    #[default]
    Normal,
    /// Warmup set, excluded from every volume and record computation
    Warmup,
    /// Drop set
    Drop,
    /// Rest-pause set
    RestPause,
    /// Cluster set
    Cluster,
    /// First or second exercise of a superset pair
    Biset,
    /// Member of a three-exercise giant set
    Triset,
}

impl SetKind {
    /// Snake-case name, identical to the wire format
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warmup => "warmup",
            Self::Drop => "drop",
            Self::RestPause => "rest_pause",
            Self::Cluster => "cluster",
            Self::Biset => "biset",
            Self::Triset => "triset",
        }
    }
}

/// A single recorded set
///
/// Deserialization goes through [`ObservationRecord`], so a missing
/// `exerciseId` or an unparseable `performedAt` is rejected at the edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ObservationRecord")]
pub struct Observation {
    /// Load in kilograms
    pub weight: f64,
    /// Completed repetitions
    pub reps: u32,
    /// When the set was performed
    pub performed_at: DateTime<Utc>,
    /// Exercise identity
    pub exercise_id: String,
    /// Muscle-group / category tags of the exercise
    pub category_tags: BTreeSet<String>,
    /// Set classification
    pub set_kind: SetKind,
}

impl Observation {
    /// Create a normal set with no category tags
    #[must_use]
    pub fn new(
        exercise_id: impl Into<String>,
        weight: f64,
        reps: u32,
        performed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            weight,
            reps,
            performed_at,
            exercise_id: exercise_id.into(),
            category_tags: BTreeSet::new(),
            set_kind: SetKind::Normal,
        }
    }

    /// Attach category tags
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the set kind
    #[must_use]
    pub const fn with_set_kind(mut self, set_kind: SetKind) -> Self {
        self.set_kind = set_kind;
        self
    }

    /// Whether this is a warmup set
    #[must_use]
    pub fn is_warmup(&self) -> bool {
        self.set_kind == SetKind::Warmup
    }

    /// Whether the set carries any strength/volume contribution
    #[must_use]
    pub fn has_contribution(&self) -> bool {
        self.weight.is_finite() && self.weight > 0.0 && self.reps > 0
    }

    /// Whether the set counts toward volume and record computations
    #[must_use]
    pub fn qualifies(&self) -> bool {
        !self.is_warmup() && self.has_contribution()
    }

    /// Training volume (`weight * reps`), zero for non-contributing sets
    #[must_use]
    pub fn volume(&self) -> f64 {
        if self.has_contribution() {
            self.weight * f64::from(self.reps)
        } else {
            0.0
        }
    }

    /// Whether the exercise identity is present
    #[must_use]
    pub fn has_identity(&self) -> bool {
        !self.exercise_id.trim().is_empty()
    }
}

/// Raw observation as delivered by the external workout-log store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationRecord {
    /// Load in kilograms
    pub weight: f64,
    /// Repetitions; negative values are treated as zero
    #[serde(default)]
    pub reps: i64,
    /// ISO-8601 date or date-time
    pub performed_at: String,
    /// Exercise identity
    #[serde(default)]
    pub exercise_id: Option<String>,
    /// Category tags
    #[serde(default)]
    pub category_tags: Vec<String>,
    /// Set classification
    #[serde(default)]
    pub set_kind: SetKind,
}

impl TryFrom<ObservationRecord> for Observation {
    type Error = AppError;

    fn try_from(record: ObservationRecord) -> AppResult<Self> {
        let exercise_id = record
            .exercise_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::invalid_input("Observation is missing exerciseId"))?;

        if !record.weight.is_finite() {
            return Err(AppError::invalid_format(format!(
                "Observation weight must be finite, got {}",
                record.weight
            ))
            .with_resource_id(exercise_id));
        }

        let performed_at = parse_performed_at(&record.performed_at)
            .map_err(|e| e.with_resource_id(exercise_id.clone()))?;
        let reps = u32::try_from(record.reps.max(0)).unwrap_or(u32::MAX);

        Ok(Self {
            weight: record.weight,
            reps,
            performed_at,
            exercise_id,
            category_tags: record.category_tags.into_iter().collect(),
            set_kind: record.set_kind,
        })
    }
}

/// Parse an ISO-8601 timestamp, accepting RFC 3339, offset-less date-times,
/// and bare dates (interpreted as midnight UTC)
///
/// # Errors
///
/// Returns `InvalidFormat` if the value matches none of the accepted forms
pub fn parse_performed_at(value: &str) -> AppResult<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::default()).and_utc());
    }

    Err(AppError::invalid_format(format!(
        "performedAt is not an ISO-8601 date: '{value}'"
    )))
}
