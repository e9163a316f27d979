// ABOUTME: Core types and constants for IronLog strength-training intelligence
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # IronLog Core
//!
//! Foundation crate providing shared types and constants for the IronLog
//! strength intelligence workspace. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Estimator coefficients, record thresholds, labels, and env keys
//! - **models**: Set observations, exercise stats snapshots, and weight keys

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Observation, `ExerciseStatsSnapshot`, `WeightKey`)
pub mod models;
