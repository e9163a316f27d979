// ABOUTME: Personal-record classification of a set against an exercise's stats snapshot
// ABOUTME: Strength PRs take priority over rep PRs; first-ever sets become baseline records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Record Classification
//!
//! Decides whether a single set is a personal record, comparing it with the
//! read-only [`ExerciseStatsSnapshot`] supplied by the external stats store.
//!
//! Decision order:
//!
//! 1. A set with no strength contribution (weight or reps not positive) is never a record.
//! 2. No history for the exercise: baseline record.
//! 3. Estimate beats the previous best by more than [`ESTIMATE_EPSILON`]: strength record.
//! 4. More reps than ever before at the exact same weight: rep record.
//! 5. Otherwise no record.

use ironlog_core::constants::records::{BASELINE_LABEL, ESTIMATE_EPSILON, WEIGHT_UNIT};
use ironlog_core::models::{ExerciseStatsSnapshot, WeightKey};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::{estimate_one_rep_max, round_to_decimals};

/// Which kind of record a set achieved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrKind {
    /// Not a record
    #[default]
    None,
    /// New best estimated single-rep max (includes the baseline record)
    Estimate,
    /// New best rep count at an exact weight
    Reps,
}

impl PrKind {
    /// Lowercase name, identical to the wire format
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Estimate => "estimate",
            Self::Reps => "reps",
        }
    }
}

/// Verdict produced for one set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrClassification {
    /// Whether the set is a personal record
    #[serde(rename = "isPR")]
    pub is_pr: bool,
    /// Record kind
    pub kind: PrKind,
    /// Value that was beaten (previous best estimate or previous best reps)
    pub previous_value: f64,
    /// Human-readable improvement, empty when no record
    pub diff_label: String,
}

impl PrClassification {
    /// The "no record" verdict
    #[must_use]
    pub const fn none() -> Self {
        Self {
            is_pr: false,
            kind: PrKind::None,
            previous_value: 0.0,
            diff_label: String::new(),
        }
    }

    /// First record ever logged for an exercise
    #[must_use]
    pub fn baseline() -> Self {
        Self {
            is_pr: true,
            kind: PrKind::Estimate,
            previous_value: 0.0,
            diff_label: BASELINE_LABEL.to_owned(),
        }
    }

    fn estimate(previous_best: f64, current: f64) -> Self {
        let diff = round_to_decimals(current - previous_best, 2);
        Self {
            is_pr: true,
            kind: PrKind::Estimate,
            previous_value: previous_best,
            diff_label: format!("+{diff}{WEIGHT_UNIT} estimate"),
        }
    }

    fn reps(previous_reps: u32, reps: u32, weight: WeightKey) -> Self {
        Self {
            is_pr: true,
            kind: PrKind::Reps,
            previous_value: f64::from(previous_reps),
            diff_label: format!("+{} reps ({weight}{WEIGHT_UNIT})", reps - previous_reps),
        }
    }
}

impl Default for PrClassification {
    fn default() -> Self {
        Self::none()
    }
}

/// Stateless personal-record classifier
pub struct RecordClassifier;

impl RecordClassifier {
    /// Classify a set against an optional snapshot
    ///
    /// `snapshot` is `None` when the store has no history for the exercise
    /// or could not be reached; both produce the baseline record.
    #[must_use]
    pub fn classify(
        weight: f64,
        reps: u32,
        snapshot: Option<&ExerciseStatsSnapshot>,
    ) -> PrClassification {
        // Judged on the inputs; a tiny load may still round to a 0.00 estimate
        if !weight.is_finite() || weight <= 0.0 || reps == 0 {
            return PrClassification::none();
        }
        let current = estimate_one_rep_max(weight, reps);

        let Some(snapshot) = snapshot.filter(|s| s.has_history()) else {
            debug!(weight, reps, estimate = current, "no history, baseline record");
            return PrClassification::baseline();
        };

        if current > snapshot.best_estimate + ESTIMATE_EPSILON {
            debug!(
                exercise_id = %snapshot.exercise_id,
                estimate = current,
                previous = snapshot.best_estimate,
                "estimate record"
            );
            return PrClassification::estimate(snapshot.best_estimate, current);
        }

        // Exact-weight lookup; an unseen weight yields 0 and is never a rep record
        let previous_reps = snapshot.best_reps_at(weight);
        if previous_reps > 0 && reps > previous_reps {
            if let Some(key) = WeightKey::new(weight) {
                debug!(
                    exercise_id = %snapshot.exercise_id,
                    weight,
                    reps,
                    previous_reps,
                    "rep record"
                );
                return PrClassification::reps(previous_reps, reps, key);
            }
        }

        PrClassification::none()
    }
}
