// ABOUTME: Strength estimation algorithms used by record detection and progression charts
// ABOUTME: Re-exports the single-rep-max estimator and its rounding helper

//! Algorithm Module
//!
//! Pure, deterministic calculations shared by the record classifier and the
//! aggregation pipeline. Safe to call concurrently from any number of callers.

pub mod one_rep_max;

pub use one_rep_max::{estimate_one_rep_max, round_to_decimals};
