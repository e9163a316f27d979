// ABOUTME: Catmull-Rom curve smoothing for chart presentation of progression series
// ABOUTME: Pure geometry expressed as cubic Bezier segments; carries no statistical meaning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ironlog_core::constants::trend::CATMULL_ROM_DIVISOR;
use serde::{Deserialize, Serialize};

use crate::algorithms::round_to_decimals;
use crate::statistical_analysis::TrendPoint;

/// One cubic Bezier segment, starting where the previous one ended
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BezierSegment {
    /// First control point
    pub control1: TrendPoint,
    /// Second control point
    pub control2: TrendPoint,
    /// Segment end (an input point)
    pub end: TrendPoint,
}

/// Smoothed curve passing through every input point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmoothPath {
    /// First input point, `None` for an empty series
    pub start: Option<TrendPoint>,
    /// One segment per consecutive pair of input points
    pub segments: Vec<BezierSegment>,
}

impl SmoothPath {
    /// Whether the path draws nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// SVG path data (`M x,y C c1 c2 end ...`), coordinates rounded to 2 decimals
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        let Some(start) = self.start else {
            return String::new();
        };

        let curves: String = self
            .segments
            .iter()
            .map(|segment| {
                format!(
                    " C {} {} {}",
                    svg_point(segment.control1),
                    svg_point(segment.control2),
                    svg_point(segment.end)
                )
            })
            .collect();
        format!("M {}{curves}", svg_point(start))
    }
}

fn svg_point(point: TrendPoint) -> String {
    format!(
        "{},{}",
        round_to_decimals(point.x, 2),
        round_to_decimals(point.y, 2)
    )
}

/// Build a uniform Catmull-Rom curve through `points`
///
/// End segments reuse the boundary point as the missing neighbour, so the
/// curve starts and ends exactly on the data without overshooting it.
#[must_use]
pub fn smooth_path(points: &[TrendPoint]) -> SmoothPath {
    let Some(&start) = points.first() else {
        return SmoothPath::default();
    };

    let segments = points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let p1 = pair[0];
            let p2 = pair[1];
            let p0 = if i == 0 { p1 } else { points[i - 1] };
            let p3 = points.get(i + 2).copied().unwrap_or(p2);

            BezierSegment {
                control1: TrendPoint::new(
                    p1.x + (p2.x - p0.x) / CATMULL_ROM_DIVISOR,
                    p1.y + (p2.y - p0.y) / CATMULL_ROM_DIVISOR,
                ),
                control2: TrendPoint::new(
                    p2.x - (p3.x - p1.x) / CATMULL_ROM_DIVISOR,
                    p2.y - (p3.y - p1.y) / CATMULL_ROM_DIVISOR,
                ),
                end: p2,
            }
        })
        .collect();

    SmoothPath {
        start: Some(start),
        segments,
    }
}
