//! Distance-threshold decimation of raw pointer samples.

use crate::fitter::QualityTier;
use crate::gate::DeviceKind;
use kurbo::Point;

/// Decimate a sample sequence, keeping the first and last points and any
/// interior point at least `min_distance` away from the most recently kept
/// one. A single left-to-right pass; reapplying with the same threshold is
/// a no-op.
pub fn decimate(points: &[Point], min_distance: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let last = points[points.len() - 1];
    let mut kept = Vec::with_capacity(points.len());
    kept.push(points[0]);
    let mut anchor = points[0];

    for &point in &points[1..points.len() - 1] {
        if anchor.distance(point) >= min_distance {
            kept.push(point);
            anchor = point;
        }
    }

    kept.push(last);
    kept
}

/// Decimation distance for the live preview of an in-progress gesture.
///
/// High-tier surfaces with a stylus keep sub-pixel detail; coarser input
/// trades fidelity for fewer curve segments.
pub fn live_min_distance(tier: QualityTier, device: DeviceKind) -> f64 {
    match (tier, device) {
        (QualityTier::High, DeviceKind::Stylus) => 0.5,
        (QualityTier::High, _) => 1.0,
        (QualityTier::Standard, DeviceKind::Stylus) => 2.0,
        (QualityTier::Standard, _) => 3.0,
    }
}

/// Decimation distance applied once at commit time. Stricter than the live
/// threshold so the persisted path is leaner than the preview.
pub fn commit_min_distance(tier: QualityTier, device: DeviceKind) -> f64 {
    live_min_distance(tier, device) * 2.0
}
