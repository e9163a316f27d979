// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Estimator coefficients, record thresholds, chart labels, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large block.

/// Estimated single-rep-max formula coefficients
///
/// `estimate = weight * (1 + REPS_COEFFICIENT * reps) ^ EXPONENT`
pub mod estimation {
    /// Per-rep growth coefficient
    pub const REPS_COEFFICIENT: f64 = 0.032;

    /// Power-law exponent applied to the rep factor
    pub const EXPONENT: f64 = 0.9;

    /// Estimates are rounded to this many decimal places
    pub const DECIMAL_PLACES: i32 = 2;
}

/// Personal-record detection thresholds and labels
pub mod records {
    /// Margin added to the previous best estimate before comparison
    pub const ESTIMATE_EPSILON: f64 = 0.1;

    /// Label attached to the very first record for an exercise
    pub const BASELINE_LABEL: &str = "baseline record";

    /// Unit suffix used in record labels
    pub const WEIGHT_UNIT: &str = "kg";
}

/// Time-bucket aggregation labels and formats
pub mod aggregation {
    /// Prefix for sequential weekly labels ("S1", "S2", ...)
    pub const WEEK_LABEL_PREFIX: &str = "S";

    /// `chrono` format of a weekly bucket key (Monday of the ISO week)
    pub const WEEK_KEY_FORMAT: &str = "%Y-%m-%d";

    /// `chrono` format of a monthly bucket key
    pub const MONTH_KEY_FORMAT: &str = "%Y-%m";
}

/// Trend analysis constants
pub mod trend {
    /// Minimum number of points required to fit a line
    pub const MIN_POINTS_FOR_REGRESSION: usize = 2;

    /// Denominators smaller than this are treated as zero x-variance
    pub const ZERO_VARIANCE_EPSILON: f64 = 1e-12;

    /// Catmull-Rom to cubic Bezier control point divisor (uniform, tension 0.5)
    pub const CATMULL_ROM_DIVISOR: f64 = 6.0;
}

/// Service identification for logging
pub mod service_names {
    /// Service name used in structured logs
    pub const IRONLOG: &str = "ironlog";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "IRONLOG_ENVIRONMENT";

    /// Default aggregation granularity (`week` or `month`)
    pub const DEFAULT_GRANULARITY: &str = "IRONLOG_DEFAULT_GRANULARITY";

    /// Metric used for trend lines (`volume` or `reps`)
    pub const TREND_METRIC: &str = "IRONLOG_TREND_METRIC";

    /// Timeout for stats snapshot fetches, in milliseconds
    pub const STATS_FETCH_TIMEOUT_MS: &str = "IRONLOG_STATS_FETCH_TIMEOUT_MS";
}

/// Default configuration values
pub mod defaults {
    /// Default stats snapshot fetch timeout
    pub const STATS_FETCH_TIMEOUT_MS: u64 = 2_000;
}
