// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into typed analysis and repository settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! Configuration is read exclusively from environment variables; every value
//! has a default so an empty environment yields a working setup.

use std::env;
use std::fmt;
use std::time::Duration;

use ironlog_core::constants::{defaults, env_config};
use ironlog_core::errors::{AppError, AppResult};
use ironlog_intelligence::{Granularity, TrendMetric};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Granularity used when a caller does not pick one
    pub default_granularity: Granularity,
    /// Metric trended when a caller does not pick one
    pub trend_metric: TrendMetric,
    /// Upper bound on a stats snapshot fetch before it counts as absent
    pub stats_fetch_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            default_granularity: Granularity::default(),
            trend_metric: TrendMetric::default(),
            stats_fetch_timeout: Duration::from_millis(defaults::STATS_FETCH_TIMEOUT_MS),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set to an unparseable value
    pub fn from_env() -> AppResult<Self> {
        let environment =
            Environment::from_str_or_default(&env_var_or(env_config::ENVIRONMENT, "development"));

        let default_granularity = env_var_or(env_config::DEFAULT_GRANULARITY, "week")
            .parse::<Granularity>()
            .map_err(|e| invalid_var(env_config::DEFAULT_GRANULARITY, &e))?;

        let trend_metric = env_var_or(env_config::TREND_METRIC, "volume")
            .parse::<TrendMetric>()
            .map_err(|e| invalid_var(env_config::TREND_METRIC, &e))?;

        let timeout_ms = env_var_or(
            env_config::STATS_FETCH_TIMEOUT_MS,
            &defaults::STATS_FETCH_TIMEOUT_MS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| invalid_var(env_config::STATS_FETCH_TIMEOUT_MS, &e))?;

        let config = Self {
            environment,
            default_granularity,
            trend_metric,
            stats_fetch_timeout: Duration::from_millis(timeout_ms),
        };
        config.validate()?;

        info!(
            environment = %config.environment,
            granularity = %config.default_granularity,
            metric = %config.trend_metric,
            timeout_ms,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a zero fetch timeout
    pub fn validate(&self) -> AppResult<()> {
        if self.stats_fetch_timeout.is_zero() {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_config::STATS_FETCH_TIMEOUT_MS
            )));
        }
        Ok(())
    }

    /// Human-readable summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} granularity={} metric={} stats_fetch_timeout_ms={}",
            self.environment,
            self.default_granularity,
            self.trend_metric,
            self.stats_fetch_timeout.as_millis()
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn invalid_var(key: &str, error: &dyn fmt::Display) -> AppError {
    AppError::config_invalid(format!("{key}: {error}"))
}
