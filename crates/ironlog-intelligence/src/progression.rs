// ABOUTME: Chart-ready progression report combining aggregation, regression and smoothing
// ABOUTME: Selects the metric to trend (volume or reps) and classifies the trend direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::Observation;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::aggregation::{AggregatedPoint, AggregationFilter, Aggregator, Granularity};
use crate::smoothing::{smooth_path, SmoothPath};
use crate::statistical_analysis::{
    RegressionResult, StatisticalAnalyzer, TrendDirection, TrendLine, TrendPoint,
};

/// Which aggregated value is plotted and trended
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendMetric {
    /// Average volume per set
    #[default]
    Volume,
    /// Average reps per set
    Reps,
}

impl TrendMetric {
    /// Extract the metric value from a chart point
    #[must_use]
    pub const fn value_of(self, point: &AggregatedPoint) -> f64 {
        match self {
            Self::Volume => point.average_volume_per_set,
            Self::Reps => point.average_reps,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::Reps => "reps",
        }
    }
}

impl fmt::Display for TrendMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendMetric {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "volume" => Ok(Self::Volume),
            "reps" => Ok(Self::Reps),
            other => Err(AppError::invalid_input(format!(
                "Unknown trend metric: '{other}'. Valid options: volume, reps"
            ))),
        }
    }
}

/// Everything the chart layer needs for one progression view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionReport {
    /// Grouping used for the buckets
    pub granularity: Granularity,
    /// Selection applied to the observations
    pub filter: AggregationFilter,
    /// Metric plotted on the y axis
    pub metric: TrendMetric,
    /// Ascending chart points
    pub points: Vec<AggregatedPoint>,
    /// Best-fit line, absent with fewer than 2 points
    pub trend: Option<TrendLine>,
    /// Full regression output behind `trend`
    pub regression: Option<RegressionResult>,
    /// Direction derived from the trend slope
    pub direction: TrendDirection,
    /// Smoothed curve through the plotted points (presentation only)
    pub smoothed: SmoothPath,
}

impl ProgressionReport {
    /// Whether enough data exists to draw a trend line
    #[must_use]
    pub const fn has_trend(&self) -> bool {
        self.trend.is_some()
    }
}

/// Builds progression reports from raw observations
pub struct ProgressionAnalyzer;

impl ProgressionAnalyzer {
    /// Aggregate, fit and smooth in one pass
    ///
    /// Points are plotted at `x = 0, 1, 2, ...` in bucket order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the filter value is blank
    pub fn analyze(
        observations: &[Observation],
        granularity: Granularity,
        filter: &AggregationFilter,
        metric: TrendMetric,
    ) -> AppResult<ProgressionReport> {
        let points = Aggregator::aggregate(observations, granularity, filter)?;
        let series: Vec<TrendPoint> =
            StatisticalAnalyzer::indexed_points(points.iter().map(|p| metric.value_of(p)));

        let regression = StatisticalAnalyzer::linear_regression(&series);
        let trend = StatisticalAnalyzer::fit_trend_line(&series);
        let direction = TrendDirection::from_trend(trend.as_ref());
        let smoothed = smooth_path(&series);

        info!(
            filter = %filter.value,
            granularity = %granularity,
            metric = %metric,
            points = points.len(),
            direction = ?direction,
            "progression analyzed"
        );

        Ok(ProgressionReport {
            granularity,
            filter: filter.clone(),
            metric,
            points,
            trend,
            regression,
            direction,
            smoothed,
        })
    }
}
