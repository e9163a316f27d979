// ABOUTME: Configuration module root
// ABOUTME: Re-exports environment-driven application configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing into `AppConfig`
pub mod environment;

pub use environment::{AppConfig, Environment};
