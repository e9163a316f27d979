// ABOUTME: Strength-training intelligence engine for IronLog
// ABOUTME: Estimation, personal-record detection, aggregation, and trend analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # IronLog Intelligence
//!
//! Pure, side-effect-free analysis of strength-training sets. Every operation
//! here is synchronous and lock-free, so it can be called in parallel across
//! unrelated requests. The only I/O boundary is the [`StatsRepository`]
//! contract, which this crate defines but does not implement against a real
//! store.
//!
//! Two independent flows share the estimator:
//!
//! - sets → [`estimate_one_rep_max`] → [`RecordClassifier`] (with a stats snapshot) → verdict
//! - sets → [`Aggregator`] → [`StatisticalAnalyzer`] / [`smooth_path`] → chart series

/// Estimated single-rep-max formula
pub mod algorithms;

/// Week/month bucketing of volume and reps
pub mod aggregation;

/// Aggregation + regression + smoothing in one report
pub mod progression;

/// Personal-record classification
pub mod records;

/// Catmull-Rom smoothing for chart presentation
pub mod smoothing;

/// Least-squares trend lines
pub mod statistical_analysis;

/// Read-only contract for the external stats store
pub mod stats_repository;

pub use aggregation::{
    AggregatedPoint, AggregationFilter, Aggregator, Bucket, FilterKind, Granularity,
};
pub use algorithms::estimate_one_rep_max;
pub use progression::{ProgressionAnalyzer, ProgressionReport, TrendMetric};
pub use records::{PrClassification, PrKind, RecordClassifier};
pub use smoothing::{smooth_path, BezierSegment, SmoothPath};
pub use statistical_analysis::{
    RegressionResult, StatisticalAnalyzer, TrendDirection, TrendLine, TrendPoint,
};
pub use stats_repository::{InMemoryStatsRepository, StatsRepository};
