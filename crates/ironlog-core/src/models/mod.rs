// ABOUTME: Core data models for strength-training intelligence
// ABOUTME: Re-exports Observation, SetKind, ExerciseStatsSnapshot and WeightKey
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Observation`: one recorded set (weight, reps, timestamp, exercise)
//! - `ObservationRecord`: the raw wire form delivered by the workout-log store
//! - `ExerciseStatsSnapshot`: the read-only historical aggregate for an exercise
//! - `WeightKey`: canonical exact-weight map key

mod observation;
mod stats;

pub use observation::{parse_performed_at, Observation, ObservationRecord, SetKind};
pub use stats::{ExerciseStatsSnapshot, WeightKey};
