//! Curve fitting: filtered samples to smooth path segments.

use crate::geometry;
use crate::path::PathSegment;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Quality profile selected by the host environment. Larger, higher
/// resolution surfaces run `High`; it governs filter distances, the
/// curve-fit algorithm, and encoded coordinate precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QualityTier {
    #[default]
    Standard,
    High,
}

impl QualityTier {
    /// Fractional digits used when encoding coordinates at this tier.
    pub fn precision(&self) -> usize {
        match self {
            QualityTier::Standard => 3,
            QualityTier::High => 4,
        }
    }
}

/// Chord deviation below which a high-tier stroke is emitted as a single
/// straight segment instead of cubics, so intentionally straight strokes
/// do not pick up visible jitter.
const STRAIGHT_LINE_TOLERANCE: f64 = 3.0;

/// Catmull-Rom tangent scale for high-tier cubic control points.
const TANGENT_SCALE: f64 = 0.15;

/// Fit a smooth curve through a filtered point sequence.
///
/// Zero points yield an empty path, one point a bare moveto, and two
/// points a straight segment. Beyond that, `Standard` emits midpoint
/// quadratics and `High` emits Catmull-Rom style cubics (or a straight
/// segment when the points barely deviate from their chord).
pub fn fit(points: &[Point], tier: QualityTier) -> Vec<PathSegment> {
    match points {
        [] => Vec::new(),
        [p] => vec![PathSegment::MoveTo(*p)],
        [a, b] => vec![PathSegment::MoveTo(*a), PathSegment::LineTo(*b)],
        _ => match tier {
            QualityTier::Standard => fit_quadratic(points),
            QualityTier::High => fit_cubic(points),
        },
    }
}

/// Quadratic fit: each interior point becomes a control point whose
/// segment ends at the midpoint to its successor. The curve stays
/// continuously differentiable without a separate spline solve.
fn fit_quadratic(points: &[Point]) -> Vec<PathSegment> {
    let mut segments = Vec::with_capacity(points.len());
    segments.push(PathSegment::MoveTo(points[0]));

    for i in 1..points.len() - 1 {
        let control = points[i];
        let end = points[i].midpoint(points[i + 1]);
        segments.push(PathSegment::QuadTo(control, end));
    }

    segments.push(PathSegment::SmoothQuadTo(points[points.len() - 1]));
    segments
}

/// Cubic fit with control points derived from neighbor tangents.
/// Smoother curvature than the quadratic fit at the cost of more encoded
/// data.
fn fit_cubic(points: &[Point]) -> Vec<PathSegment> {
    let n = points.len();

    if geometry::max_chord_deviation(points) < STRAIGHT_LINE_TOLERANCE {
        return vec![
            PathSegment::MoveTo(points[0]),
            PathSegment::LineTo(points[n - 1]),
        ];
    }

    let mut segments = Vec::with_capacity(n);
    segments.push(PathSegment::MoveTo(points[0]));

    for i in 0..n - 1 {
        // Tangents come from the points two steps apart, clamped to the
        // adjacent point at the sequence boundaries.
        let p0 = points[if i == 0 { 0 } else { i - 1 }];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[if i + 2 >= n { n - 1 } else { i + 2 }];

        let c1 = Point::new(
            p1.x + TANGENT_SCALE * (p2.x - p0.x),
            p1.y + TANGENT_SCALE * (p2.y - p0.y),
        );
        let c2 = Point::new(
            p2.x - TANGENT_SCALE * (p3.x - p1.x),
            p2.y - TANGENT_SCALE * (p3.y - p1.y),
        );

        segments.push(PathSegment::CurveTo(c1, c2, p2));
    }

    segments
}
