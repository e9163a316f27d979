// ABOUTME: Stats repository adapters for the root crate
// ABOUTME: File-backed read-only access to the external per-exercise stats export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON file adapter for `StatsRepository`
pub mod json_file;

pub use ironlog_intelligence::stats_repository::{InMemoryStatsRepository, StatsRepository};
pub use json_file::JsonFileStatsRepository;
