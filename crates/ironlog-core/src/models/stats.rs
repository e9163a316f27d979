// ABOUTME: Per-exercise historical stats snapshot read by the record classifier
// ABOUTME: Keys best-reps-at-weight by a canonical weight key instead of string coercion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AppError;

/// Exact weight used as a map key
///
/// Two keys are equal only when they denote the same `f64` value, so no
/// rounding or bucketing ever merges different weights. Parsing goes through
/// the numeric value, which makes `"105"`, `"105.0"` and `"105.00"` the same
/// key. Display uses the shortest form (`105`, `102.5`).
#[derive(Debug, Clone, Copy)]
pub struct WeightKey(f64);

impl WeightKey {
    /// Build a key from a weight; `None` for NaN or infinite values
    #[must_use]
    pub fn new(weight: f64) -> Option<Self> {
        if !weight.is_finite() {
            return None;
        }
        // -0.0 and 0.0 must hash identically
        Some(Self(if weight == 0.0 { 0.0 } else { weight }))
    }

    /// The weight in kilograms
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for WeightKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for WeightKey {}

impl PartialOrd for WeightKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeightKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for WeightKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for WeightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WeightKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| AppError::invalid_format(format!("Invalid weight key: '{s}'")))
    }
}

impl Serialize for WeightKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct WeightKeyVisitor;

impl Visitor<'_> for WeightKeyVisitor {
    type Value = WeightKey;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a finite weight as a number or numeric string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<WeightKey, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<WeightKey, E> {
        WeightKey::new(value).ok_or_else(|| E::custom("weight must be finite"))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<WeightKey, E> {
        self.visit_f64(value as f64)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<WeightKey, E> {
        self.visit_f64(value as f64)
    }
}

impl<'de> Deserialize<'de> for WeightKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WeightKeyVisitor)
    }
}

/// Historical aggregate for one exercise, owned by the external stats store
///
/// The classifier only ever reads a snapshot. `exercise_id` is optional on
/// the wire because the store already keys snapshots by exercise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseStatsSnapshot {
    /// Exercise identity
    #[serde(default)]
    pub exercise_id: String,
    /// Best estimated single-rep max recorded so far
    #[serde(default)]
    pub best_estimate: f64,
    /// Best rep count previously achieved at each exact weight
    #[serde(default)]
    pub best_reps_at_weight: BTreeMap<WeightKey, u32>,
    /// Number of observations folded into this snapshot
    #[serde(default)]
    pub total_observations: u64,
}

impl ExerciseStatsSnapshot {
    /// Empty snapshot for an exercise
    #[must_use]
    pub fn new(exercise_id: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            ..Self::default()
        }
    }

    /// Set the best estimate
    #[must_use]
    pub const fn with_best_estimate(mut self, best_estimate: f64) -> Self {
        self.best_estimate = best_estimate;
        self
    }

    /// Record the best rep count at an exact weight; non-finite weights are ignored
    #[must_use]
    pub fn with_reps_at_weight(mut self, weight: f64, reps: u32) -> Self {
        if let Some(key) = WeightKey::new(weight) {
            self.best_reps_at_weight.insert(key, reps);
        }
        self
    }

    /// Set the observation count
    #[must_use]
    pub const fn with_total_observations(mut self, total_observations: u64) -> Self {
        self.total_observations = total_observations;
        self
    }

    /// Whether any history exists
    #[must_use]
    pub const fn has_history(&self) -> bool {
        self.total_observations > 0
    }

    /// Best reps previously achieved at exactly `weight`, zero when never attempted
    #[must_use]
    pub fn best_reps_at(&self, weight: f64) -> u32 {
        WeightKey::new(weight)
            .and_then(|key| self.best_reps_at_weight.get(&key).copied())
            .unwrap_or(0)
    }
}
