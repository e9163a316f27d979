// ABOUTME: Estimated single-rep-max calculation from a submaximal weight x reps set
// ABOUTME: Power-law estimator applied to every rep count so every set is comparable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ironlog_core::constants::estimation::{DECIMAL_PLACES, EXPONENT, REPS_COEFFICIENT};

/// Estimate the single-rep max for a set
///
/// Formula: `weight x (1 + 0.032 x reps) ^ 0.9`, rounded to 2 decimals.
///
/// Unlike stricter 1RM formulas this is not gated to `reps >= 4`: any set,
/// however light, yields an estimate so the record classifier always has a
/// comparable value. Returns exactly `0.0` when `weight <= 0`, `reps == 0`,
/// or `weight` is not finite.
///
/// # Example
///
/// ```rust
/// use ironlog_intelligence::algorithms::estimate_one_rep_max;
///
/// assert!((estimate_one_rep_max(100.0, 5) - 114.29).abs() < 1e-9);
/// assert!(estimate_one_rep_max(0.0, 5).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if !weight.is_finite() || weight <= 0.0 || reps == 0 {
        return 0.0;
    }

    let rep_factor = REPS_COEFFICIENT.mul_add(f64::from(reps), 1.0);
    round_to_decimals(weight * rep_factor.powf(EXPONENT), DECIMAL_PLACES)
}

/// Round half away from zero to `places` decimals
#[must_use]
pub fn round_to_decimals(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
