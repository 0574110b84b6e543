//! Point-local erasing of committed strokes.
//!
//! Erasing decodes each stroke to its coordinate pairs (control points
//! included, so hit-testing is conservative), splits the sequence into
//! maximal runs of points outside the erase radius, and replaces the
//! stroke with one new stroke per surviving run. The decoded geometry is
//! re-encoded as straight segments: the goal is fidelity to what was
//! visually removed, not re-smoothing.

use crate::geometry;
use crate::path::{self, PathSegment};
use crate::store::StrokeStore;
use crate::stroke::{Stroke, StrokeId};
use kurbo::Point;

/// Fractional digits used when re-encoding surviving runs.
const RUN_PRECISION: usize = 3;

/// Spacing between sibling replacement timestamps, keeping their relative
/// order deterministic.
const SIBLING_EPSILON: f64 = 1e-3;

/// Remove the material of every stroke within `radius` of `center`.
///
/// Returns `true` when at least one stroke was split or removed; when
/// nothing was touched the store is left untouched so the host records no
/// spurious history entry. All mutations are applied as a single atomic
/// replace-set, so a partially applied erase is never observable.
pub fn erase_at(store: &mut StrokeStore, center: Point, radius: f64) -> bool {
    if !geometry::is_finite(center) || !radius.is_finite() {
        log::debug!("ignoring erase with non-finite center or radius");
        return false;
    }

    let mut removed: Vec<StrokeId> = Vec::new();
    let mut replacements: Vec<Stroke> = Vec::new();

    for stroke in store.strokes() {
        let points = match stroke.decoded_points() {
            Ok(points) => points,
            Err(err) => {
                log::warn!("skipping stroke {} for erase: {err}", stroke.id());
                continue;
            }
        };

        if points.is_empty() || points.iter().all(|p| p.distance(center) > radius) {
            continue;
        }

        removed.push(stroke.id());
        for (index, run) in surviving_runs(&points, center, radius).into_iter().enumerate() {
            let created_at = stroke.created_at + (index + 1) as f64 * SIBLING_EPSILON;
            replacements.push(stroke.replacement(encode_run(&run), created_at));
        }
    }

    if removed.is_empty() {
        return false;
    }

    store.replace_set(&removed, replacements);
    true
}

/// Split decoded points into maximal contiguous runs outside the erase
/// radius. Runs of a single point are dropped; one point cannot form a
/// visible segment.
fn surviving_runs(points: &[Point], center: Point, radius: f64) -> Vec<Vec<Point>> {
    let mut runs: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for &point in points {
        if point.distance(center) > radius {
            current.push(point);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs.retain(|run| run.len() >= 2);
    runs
}

/// Encode a run as straight segments between consecutive points.
fn encode_run(run: &[Point]) -> String {
    let mut segments = Vec::with_capacity(run.len());
    segments.push(PathSegment::MoveTo(run[0]));
    for &point in &run[1..] {
        segments.push(PathSegment::LineTo(point));
    }
    path::encode(&segments, RUN_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{SerializableColor, Tool};

    fn polyline(points: &[Point], created_at: f64) -> Stroke {
        Stroke::new(
            Tool::Pen,
            SerializableColor::black(),
            2.0,
            encode_run(points),
            created_at,
        )
    }

    fn five_point_line() -> Vec<Point> {
        (0..5).map(|i| Point::new(i as f64 * 10.0, 0.0)).collect()
    }

    fn total_points(store: &StrokeStore) -> usize {
        store
            .strokes()
            .iter()
            .map(|s| s.decoded_points().map(|p| p.len()).unwrap_or(0))
            .sum()
    }

    #[test]
    fn test_segmentation_splits_around_hit() {
        let mut store = StrokeStore::new();
        let original = polyline(&five_point_line(), 0.0);
        let original_id = original.id();
        store.append(original);

        assert!(erase_at(&mut store, Point::new(20.0, 0.0), 5.0));

        assert!(!store.contains(original_id));
        assert_eq!(store.len(), 2);

        let first = store.strokes()[0].decoded_points().unwrap();
        let second = store.strokes()[1].decoded_points().unwrap();
        assert_eq!(first, vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        assert_eq!(second, vec![Point::new(30.0, 0.0), Point::new(40.0, 0.0)]);
    }

    #[test]
    fn test_full_removal() {
        let mut store = StrokeStore::new();
        let stroke = polyline(&five_point_line(), 0.0);
        let id = stroke.id();
        store.append(stroke);

        assert!(erase_at(&mut store, Point::new(20.0, 0.0), 100.0));
        assert!(!store.contains(id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_miss_leaves_store_untouched() {
        let mut store = StrokeStore::new();
        let stroke = polyline(&five_point_line(), 0.0);
        let id = stroke.id();
        store.append(stroke);

        assert!(!erase_at(&mut store, Point::new(0.0, 100.0), 5.0));
        assert_eq!(store.len(), 1);
        assert!(store.contains(id));
    }

    #[test]
    fn test_never_creates_points() {
        let mut store = StrokeStore::new();
        store.append(polyline(&five_point_line(), 0.0));
        store.append(polyline(
            &[Point::new(0.0, 20.0), Point::new(40.0, 20.0)],
            1.0,
        ));

        let before = total_points(&store);
        erase_at(&mut store, Point::new(20.0, 0.0), 5.0);
        assert!(total_points(&store) <= before);
    }

    #[test]
    fn test_single_point_run_dropped() {
        // Only the middle point survives: no replacement is possible
        let points = [
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(100.0, 0.0),
        ];
        let mut store = StrokeStore::new();
        store.append(polyline(&points, 0.0));

        // Two erases, one per outer point
        assert!(erase_at(&mut store, Point::new(0.0, 0.0), 5.0));
        assert!(erase_at(&mut store, Point::new(100.0, 0.0), 5.0));
        assert!(store.is_empty());
    }

    #[test]
    fn test_sibling_timestamps_ordered() {
        let mut store = StrokeStore::new();
        store.append(polyline(&five_point_line(), 3.0));

        erase_at(&mut store, Point::new(20.0, 0.0), 5.0);

        let strokes = store.strokes();
        assert_eq!(strokes.len(), 2);
        assert!(strokes[0].created_at < strokes[1].created_at);
        assert!(strokes[0].created_at > 3.0);
        assert!(strokes[1].created_at < 4.0);
    }

    #[test]
    fn test_malformed_stroke_skipped() {
        let mut store = StrokeStore::new();
        let broken = Stroke::new(
            Tool::Pen,
            SerializableColor::black(),
            2.0,
            "M 0,0 # oops".to_string(),
            0.0,
        );
        let broken_id = broken.id();
        store.append(broken);
        store.append(polyline(&five_point_line(), 1.0));

        assert!(erase_at(&mut store, Point::new(20.0, 0.0), 5.0));
        // The malformed stroke is untouched; the healthy one was split
        assert!(store.contains(broken_id));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_replacements_keep_appearance() {
        let mut store = StrokeStore::new();
        let mut original = polyline(&five_point_line(), 0.0);
        original.tool = Tool::Marker;
        original.base_width = 6.0;
        store.append(original);

        erase_at(&mut store, Point::new(20.0, 0.0), 5.0);

        for stroke in store.strokes() {
            assert_eq!(stroke.tool, Tool::Marker);
            assert!((stroke.base_width - 6.0).abs() < f64::EPSILON);
        }
    }
}
