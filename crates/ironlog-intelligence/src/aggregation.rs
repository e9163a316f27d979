// ABOUTME: Time-bucketed volume and rep aggregation for progression charts
// ABOUTME: Groups qualifying sets by ISO week (Monday start) or calendar month
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Aggregation
//!
//! Turns an unordered collection of sets into an ascending series of
//! per-week or per-month averages. Buckets live in an ordered map keyed by
//! the bucket's start date and are finalized once, so the output order never
//! depends on input order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use ironlog_core::constants::aggregation::{MONTH_KEY_FORMAT, WEEK_KEY_FORMAT, WEEK_LABEL_PREFIX};
use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::Observation;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Time window used to group observations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// ISO week starting on Monday
    #[default]
    Week,
    /// Calendar month
    Month,
}

impl Granularity {
    /// Start date of the bucket containing `date`
    ///
    /// Weeks map back to Monday: Sunday goes back 6 days, any other day
    /// goes back `weekday - 1` days.
    #[must_use]
    pub fn bucket_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Week => date - Duration::days(i64::from(date.weekday().num_days_from_monday())),
            Self::Month => date - Duration::days(i64::from(date.day0())),
        }
    }

    /// Bucket key for a bucket start date (`YYYY-MM-DD` or `YYYY-MM`)
    #[must_use]
    pub fn bucket_key(self, start: NaiveDate) -> String {
        match self {
            Self::Week => start.format(WEEK_KEY_FORMAT).to_string(),
            Self::Month => start.format(MONTH_KEY_FORMAT).to_string(),
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" | "weekly" => Ok(Self::Week),
            "month" | "monthly" => Ok(Self::Month),
            other => Err(AppError::invalid_input(format!(
                "Unknown granularity: '{other}'. Valid options: week, month"
            ))),
        }
    }
}

/// What the filter value is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    /// Match against the observation's category tags
    MuscleGroup,
    /// Match against the observation's exercise id
    Exercise,
}

/// Selection of the observations to aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationFilter {
    /// Filter kind
    pub kind: FilterKind,
    /// Exercise id or category tag
    pub value: String,
}

impl AggregationFilter {
    /// Keep only sets of one exercise
    #[must_use]
    pub fn exercise(exercise_id: impl Into<String>) -> Self {
        Self {
            kind: FilterKind::Exercise,
            value: exercise_id.into(),
        }
    }

    /// Keep only sets tagged with a muscle group
    #[must_use]
    pub fn muscle_group(tag: impl Into<String>) -> Self {
        Self {
            kind: FilterKind::MuscleGroup,
            value: tag.into(),
        }
    }

    /// Whether an observation passes the filter (ignores warmup/contribution rules)
    #[must_use]
    pub fn matches(&self, observation: &Observation) -> bool {
        match self.kind {
            FilterKind::Exercise => observation.exercise_id == self.value,
            FilterKind::MuscleGroup => observation.category_tags.contains(&self.value),
        }
    }

    fn validate(&self) -> AppResult<()> {
        if self.value.trim().is_empty() {
            return Err(AppError::invalid_input(match self.kind {
                FilterKind::Exercise => "Aggregation filter requires an exercise id",
                FilterKind::MuscleGroup => "Aggregation filter requires a muscle group",
            }));
        }
        Ok(())
    }
}

/// Running totals for one time window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    /// `YYYY-MM-DD` (week start) or `YYYY-MM`
    pub key: String,
    /// Sum of `weight * reps`
    pub total_volume: f64,
    /// Sum of reps
    pub total_reps: u64,
    /// Number of sets
    pub observation_count: u64,
}

impl Bucket {
    fn empty(key: String) -> Self {
        Self {
            key,
            total_volume: 0.0,
            total_reps: 0,
            observation_count: 0,
        }
    }

    fn add(&mut self, observation: &Observation) {
        self.total_volume += observation.volume();
        self.total_reps += u64::from(observation.reps);
        self.observation_count += 1;
    }

    /// Average volume per set, rounded to the nearest integer
    #[must_use]
    pub fn average_volume_per_set(&self) -> f64 {
        if self.observation_count == 0 {
            return 0.0;
        }
        (self.total_volume / self.observation_count as f64).round()
    }

    /// Average reps per set, rounded to the nearest integer
    #[must_use]
    pub fn average_reps(&self) -> f64 {
        if self.observation_count == 0 {
            return 0.0;
        }
        (self.total_reps as f64 / self.observation_count as f64).round()
    }
}

/// One chart point derived from a bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedPoint {
    /// Bucket key
    pub date: String,
    /// `S1`, `S2`, ... for weeks; the key itself for months
    pub label: String,
    /// Rounded average volume per set
    pub average_volume_per_set: f64,
    /// Rounded average reps per set
    pub average_reps: f64,
}

/// Stateless volume/rep aggregator
pub struct Aggregator;

impl Aggregator {
    /// Aggregate observations into an ascending series of chart points
    ///
    /// Warmups and sets with non-positive weight or reps are always dropped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the filter value is blank
    pub fn aggregate(
        observations: &[Observation],
        granularity: Granularity,
        filter: &AggregationFilter,
    ) -> AppResult<Vec<AggregatedPoint>> {
        let buckets = Self::buckets(observations, granularity, filter)?;

        Ok(buckets
            .into_iter()
            .enumerate()
            .map(|(index, bucket)| {
                let label = match granularity {
                    Granularity::Week => format!("{WEEK_LABEL_PREFIX}{}", index + 1),
                    Granularity::Month => bucket.key.clone(),
                };
                AggregatedPoint {
                    average_volume_per_set: bucket.average_volume_per_set(),
                    average_reps: bucket.average_reps(),
                    date: bucket.key,
                    label,
                }
            })
            .collect())
    }

    /// Raw buckets in ascending chronological order
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the filter value is blank
    pub fn buckets(
        observations: &[Observation],
        granularity: Granularity,
        filter: &AggregationFilter,
    ) -> AppResult<Vec<Bucket>> {
        filter.validate()?;

        let mut buckets: BTreeMap<NaiveDate, Bucket> = BTreeMap::new();
        let mut skipped = 0_usize;

        for observation in observations {
            if !observation.qualifies() || !filter.matches(observation) {
                skipped += 1;
                continue;
            }
            let start = granularity.bucket_start(observation.performed_at.date_naive());
            buckets
                .entry(start)
                .or_insert_with(|| Bucket::empty(granularity.bucket_key(start)))
                .add(observation);
        }

        debug!(
            granularity = %granularity,
            filter = %filter.value,
            buckets = buckets.len(),
            skipped,
            "aggregated observations"
        );

        Ok(buckets.into_values().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ironlog_core::errors::ErrorCode;
    use ironlog_core::models::SetKind;

    fn set(day: u32, weight: f64, reps: u32) -> Observation {
        let at = Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap();
        Observation::new("bench-press", weight, reps, at).with_tags(["chest"])
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-03-10 is a Sunday, 2024-03-11 a Monday
        assert_eq!(Granularity::Week.bucket_start(date(2024, 3, 10)), date(2024, 3, 4));
        assert_eq!(Granularity::Week.bucket_start(date(2024, 3, 11)), date(2024, 3, 11));
        assert_eq!(Granularity::Week.bucket_start(date(2024, 3, 14)), date(2024, 3, 11));
    }

    #[test]
    fn test_week_start_crosses_year_boundary() {
        // 2025-01-01 is a Wednesday
        let start = Granularity::Week.bucket_start(date(2025, 1, 1));
        assert_eq!(Granularity::Week.bucket_key(start), "2024-12-30");
    }

    #[test]
    fn test_month_key() {
        let start = Granularity::Month.bucket_start(date(2024, 2, 29));
        assert_eq!(start, date(2024, 2, 1));
        assert_eq!(Granularity::Month.bucket_key(start), "2024-02");
    }

    #[test]
    fn test_same_week_sets_share_a_bucket() {
        let observations = [set(11, 100.0, 5), set(13, 100.0, 5)];
        let buckets = Aggregator::buckets(
            &observations,
            Granularity::Week,
            &AggregationFilter::exercise("bench-press"),
        )
        .unwrap();

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].observation_count, 2);
        assert!((buckets[0].total_volume - 1000.0).abs() < 1e-9);
        assert!((buckets[0].average_volume_per_set() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_output_is_ascending_regardless_of_input_order() {
        let observations = [set(25, 100.0, 5), set(4, 80.0, 8), set(12, 90.0, 6)];
        let points = Aggregator::aggregate(
            &observations,
            Granularity::Week,
            &AggregationFilter::muscle_group("chest"),
        )
        .unwrap();

        let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, ["2024-03-04", "2024-03-11", "2024-03-25"]);
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["S1", "S2", "S3"]);
    }

    #[test]
    fn test_monthly_label_is_key() {
        let points = Aggregator::aggregate(
            &[set(4, 80.0, 8)],
            Granularity::Month,
            &AggregationFilter::exercise("bench-press"),
        )
        .unwrap();
        assert_eq!(points[0].label, "2024-03");
        assert_eq!(points[0].date, "2024-03");
    }

    #[test]
    fn test_warmups_and_empty_sets_are_excluded() {
        let observations = [
            set(4, 40.0, 10).with_set_kind(SetKind::Warmup),
            set(4, 0.0, 10),
            set(4, 100.0, 0),
            set(4, 100.0, 3),
        ];
        let buckets = Aggregator::buckets(
            &observations,
            Granularity::Week,
            &AggregationFilter::exercise("bench-press"),
        )
        .unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].observation_count, 1);
        assert_eq!(buckets[0].total_reps, 3);
    }

    #[test]
    fn test_averages_round_to_nearest() {
        let observations = [set(4, 100.0, 5), set(5, 101.0, 6)];
        let points = Aggregator::aggregate(
            &observations,
            Granularity::Week,
            &AggregationFilter::exercise("bench-press"),
        )
        .unwrap();
        // (500 + 606) / 2 = 553, (5 + 6) / 2 = 5.5 -> 6
        assert!((points[0].average_volume_per_set - 553.0).abs() < 1e-9);
        assert!((points[0].average_reps - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_blank_filter_is_invalid_input() {
        let err = Aggregator::aggregate(&[], Granularity::Week, &AggregationFilter::exercise(" "))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        let points = Aggregator::aggregate(
            &[],
            Granularity::Month,
            &AggregationFilter::muscle_group("legs"),
        )
        .unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_granularity_parsing() {
        assert_eq!("Week".parse::<Granularity>().unwrap(), Granularity::Week);
        assert_eq!("monthly".parse::<Granularity>().unwrap(), Granularity::Month);
        assert!("daily".parse::<Granularity>().is_err());
    }
}
