// ABOUTME: Service layer wiring pure intelligence to external collaborators
// ABOUTME: Hosts the record service that fetches stats snapshots before classifying
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Personal-record classification backed by a stats repository
pub mod records;

pub use records::RecordService;
