//! Per-gesture stroke assembly.

use crate::filter;
use crate::fitter::{self, QualityTier};
use crate::gate::DeviceKind;
use crate::geometry;
use crate::path;
use crate::stroke::{SerializableColor, Stroke, Tool};
use kurbo::Point;

/// Transient state of the gesture being captured. Exists only between
/// gesture start and end; discarded unconditionally at gesture end
/// regardless of commit outcome.
#[derive(Debug, Clone)]
pub struct GestureState {
    pub tool: Tool,
    pub color: SerializableColor,
    pub base_width: f64,
    pub device: DeviceKind,
    raw_points: Vec<Point>,
}

/// Accumulates raw gesture samples and drives the filter, fitter, and
/// encoder to produce a live preview on every update and a committed
/// stroke at gesture end.
#[derive(Debug, Clone, Default)]
pub struct StrokeBuilder {
    tier: QualityTier,
    gesture: Option<GestureState>,
}

impl StrokeBuilder {
    /// Create a builder for the given quality tier.
    pub fn new(tier: QualityTier) -> Self {
        Self {
            tier,
            gesture: None,
        }
    }

    /// Begin capturing a gesture. Any gesture still in flight is
    /// discarded first; one gesture is captured at a time.
    pub fn begin(
        &mut self,
        tool: Tool,
        color: SerializableColor,
        base_width: f64,
        device: DeviceKind,
    ) {
        self.gesture = Some(GestureState {
            tool,
            color,
            base_width,
            device,
            raw_points: Vec::new(),
        });
    }

    /// Record a sample and return the refreshed live preview encoding.
    ///
    /// The whole accumulated sequence is re-filtered on each update: it is
    /// a single O(n) pass and avoids incremental-filter drift. Non-finite
    /// samples are dropped (the gesture continues) and eraser gestures
    /// produce no preview. Returns `None` when no gesture is active.
    pub fn update(&mut self, point: Point) -> Option<String> {
        let gesture = self.gesture.as_mut()?;

        if !gesture.tool.draws() {
            return None;
        }

        if geometry::is_finite(point) {
            gesture.raw_points.push(point);
        } else {
            log::debug!("dropping non-finite sample {point:?}");
        }

        let min_distance = filter::live_min_distance(self.tier, gesture.device);
        let filtered = filter::decimate(&gesture.raw_points, min_distance);
        let segments = fitter::fit(&filtered, self.tier);
        Some(path::encode(&segments, self.tier.precision()))
    }

    /// End the gesture, committing a stroke when any renderable geometry
    /// survives the final filter. The commit-time filter is stricter than
    /// the live one, so the persisted path is leaner than the preview.
    pub fn finish(&mut self, created_at: f64) -> Option<Stroke> {
        let gesture = self.gesture.take()?;

        if !gesture.tool.draws() || gesture.raw_points.is_empty() {
            return None;
        }

        let min_distance = filter::commit_min_distance(self.tier, gesture.device);
        let filtered = filter::decimate(&gesture.raw_points, min_distance);
        let segments = fitter::fit(&filtered, self.tier);

        // A lone moveto has no renderable extent and is never stored.
        if segments.len() < 2 {
            return None;
        }

        Some(Stroke::new(
            gesture.tool,
            gesture.color,
            gesture.base_width,
            path::encode(&segments, self.tier.precision()),
            created_at,
        ))
    }

    /// Check if a gesture is currently being captured.
    pub fn is_capturing(&self) -> bool {
        self.gesture.is_some()
    }

    /// The gesture being captured, if any.
    pub fn gesture(&self) -> Option<&GestureState> {
        self.gesture.as_ref()
    }
}
