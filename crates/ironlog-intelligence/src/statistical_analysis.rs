// ABOUTME: Least-squares trend analysis over aggregated progression series
// ABOUTME: Fits a best-fit line, reports slope and R-squared, and classifies direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: point counts are far below 2^52

use ironlog_core::constants::trend::{MIN_POINTS_FOR_REGRESSION, ZERO_VARIANCE_EPSILON};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A point of a numeric series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Horizontal coordinate (bucket index for progression charts)
    pub x: f64,
    /// Vertical coordinate (metric value)
    pub y: f64,
}

impl TrendPoint {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Best-fit line evaluated over the input's x range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    /// Line value at the first input x
    pub start: TrendPoint,
    /// Line value at the last input x
    pub end: TrendPoint,
    /// Raw slope (positive = improving, negative = declining)
    pub slope: f64,
}

/// Ordinary least-squares results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (rate of change)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
}

impl RegressionResult {
    /// Evaluate the line at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Direction of a progression trend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Slope above zero
    Improving,
    /// Slope below zero
    Declining,
    /// Zero slope, or not enough data for a line
    #[default]
    Stable,
}

impl TrendDirection {
    /// Classify an optional trend line by the sign of its slope
    #[must_use]
    pub fn from_trend(trend: Option<&TrendLine>) -> Self {
        match trend {
            Some(line) if line.slope > 0.0 => Self::Improving,
            Some(line) if line.slope < 0.0 => Self::Declining,
            _ => Self::Stable,
        }
    }
}

/// Statistical analyzer for progression series
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Ordinary least-squares regression
    ///
    /// `slope = (n*Sxy - Sx*Sy) / (n*Sxx - Sx^2)`, `intercept = (Sy - slope*Sx) / n`.
    ///
    /// Returns `None` for fewer than 2 points or when every point shares the
    /// same x (zero variance, no defined slope).
    #[must_use]
    pub fn linear_regression(points: &[TrendPoint]) -> Option<RegressionResult> {
        if points.len() < MIN_POINTS_FOR_REGRESSION {
            return None;
        }

        let n = points.len() as f64;
        let sum_x: f64 = points.iter().map(|p| p.x).sum();
        let sum_y: f64 = points.iter().map(|p| p.y).sum();
        let sum_xx: f64 = points.iter().map(|p| p.x * p.x).sum();
        let sum_xy: f64 = points.iter().map(|p| p.x * p.y).sum();
        let sum_yy: f64 = points.iter().map(|p| p.y * p.y).sum();

        let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
        if denominator.abs() < ZERO_VARIANCE_EPSILON {
            debug!(points = points.len(), "zero x-variance, no trend line");
            return None;
        }

        let numerator = n.mul_add(sum_xy, -(sum_x * sum_y));
        let slope = numerator / denominator;
        let intercept = slope.mul_add(-sum_x, sum_y) / n;

        let y_variance = n.mul_add(sum_yy, -(sum_y * sum_y));
        let r_squared = if y_variance.abs() < ZERO_VARIANCE_EPSILON {
            // A flat series is perfectly described by a flat line
            1.0
        } else {
            let correlation = numerator / (denominator * y_variance).sqrt();
            (correlation * correlation).clamp(0.0, 1.0)
        };

        Some(RegressionResult {
            slope,
            intercept,
            r_squared,
        })
    }

    /// Best-fit line evaluated at the first and last input x values
    ///
    /// Not extrapolated beyond the data. Absent (not an error) for 0 or 1 points.
    #[must_use]
    pub fn fit_trend_line(points: &[TrendPoint]) -> Option<TrendLine> {
        let regression = Self::linear_regression(points)?;
        let first = points.first()?;
        let last = points.last()?;

        Some(TrendLine {
            start: TrendPoint::new(first.x, regression.predict(first.x)),
            end: TrendPoint::new(last.x, regression.predict(last.x)),
            slope: regression.slope,
        })
    }

    /// Index-based points (`x = 0, 1, 2, ...`) from a series of values
    #[must_use]
    pub fn indexed_points(values: impl IntoIterator<Item = f64>) -> Vec<TrendPoint> {
        values
            .into_iter()
            .enumerate()
            .map(|(i, y)| TrendPoint::new(i as f64, y))
            .collect()
    }
}
