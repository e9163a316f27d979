// ABOUTME: Unit tests for environment-driven application configuration
// ABOUTME: Validates defaults, overrides, and rejection of invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use ironlog::config::{AppConfig, Environment};
use ironlog::constants::env_config;
use ironlog::errors::ErrorCode;
use ironlog::intelligence::{Granularity, TrendMetric};
use serial_test::serial;

const ALL_VARS: [&str; 4] = [
    env_config::ENVIRONMENT,
    env_config::DEFAULT_GRANULARITY,
    env_config::TREND_METRIC,
    env_config::STATS_FETCH_TIMEOUT_MS,
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_empty_environment_uses_defaults() {
    clear_env();

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.default_granularity, Granularity::Week);
    assert_eq!(config.trend_metric, TrendMetric::Volume);
    assert_eq!(config.stats_fetch_timeout, Duration::from_millis(2_000));
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var(env_config::ENVIRONMENT, "production");
    env::set_var(env_config::DEFAULT_GRANULARITY, "monthly");
    env::set_var(env_config::TREND_METRIC, "reps");
    env::set_var(env_config::STATS_FETCH_TIMEOUT_MS, "250");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.environment, Environment::Production);
    assert!(config.environment.is_production());
    assert_eq!(config.default_granularity, Granularity::Month);
    assert_eq!(config.trend_metric, TrendMetric::Reps);
    assert_eq!(config.stats_fetch_timeout, Duration::from_millis(250));
}

#[test]
#[serial]
fn test_unknown_granularity_is_rejected() {
    clear_env();
    env::set_var(env_config::DEFAULT_GRANULARITY, "fortnight");

    let err = AppConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains(env_config::DEFAULT_GRANULARITY));
}

#[test]
#[serial]
fn test_non_numeric_timeout_is_rejected() {
    clear_env();
    env::set_var(env_config::STATS_FETCH_TIMEOUT_MS, "soon");

    let err = AppConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_zero_timeout_is_rejected() {
    clear_env();
    env::set_var(env_config::STATS_FETCH_TIMEOUT_MS, "0");

    let err = AppConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_summary_lists_every_setting() {
    let summary = AppConfig::default().summary();
    assert_eq!(
        summary,
        "environment=development granularity=week metric=volume stats_fetch_timeout_ms=2000"
    );
}
