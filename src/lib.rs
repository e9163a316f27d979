// ABOUTME: Main library entry point for the IronLog strength-training intelligence service
// ABOUTME: Wires configuration, logging, ingestion, and stats repositories around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # IronLog
//!
//! Workout intelligence for strength training: estimated single-rep max,
//! personal-record detection at save time, and weekly/monthly progression
//! series with trend lines for charts.
//!
//! ## Architecture
//!
//! - **`ironlog-core`**: errors, domain models, constants
//! - **`ironlog-intelligence`**: pure analysis (estimator, classifier, aggregator, trends)
//! - **this crate**: environment config, logging, JSON ingestion, stats
//!   repositories backed by files, and the async [`services::RecordService`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use ironlog::config::AppConfig;
//! use ironlog::errors::AppResult;
//! use ironlog::services::RecordService;
//! use ironlog::stats::JsonFileStatsRepository;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let observations = ironlog::ingest::load_observations("workout.json").await?;
//!     let repository = Arc::new(JsonFileStatsRepository::new("stats.json"));
//!
//!     let service = RecordService::from_config(repository, &config);
//!     for verdict in service.classify_workout(&observations).await? {
//!         println!("{}", verdict.diff_label);
//!     }
//!     Ok(())
//! }
//! ```

pub use ironlog_core::{constants, errors, models};
pub use ironlog_intelligence as intelligence;

/// Environment-driven configuration
pub mod config;

/// Observation ingestion from JSON exports
pub mod ingest;

/// Structured logging setup
pub mod logging;

/// Services combining repositories with the analysis engine
pub mod services;

/// Stats repository implementations
pub mod stats;
