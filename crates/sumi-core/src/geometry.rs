//! Point and vector math shared by the stroke pipeline.

use kurbo::{Point, Vec2};

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    point.distance(proj)
}

/// Perpendicular distance from a point to the infinite line through
/// `line_start` and `line_end`.
pub fn perpendicular_distance(point: Point, line_start: Point, line_end: Point) -> f64 {
    let dx = line_end.x - line_start.x;
    let dy = line_end.y - line_start.y;

    let line_len_sq = dx * dx + dy * dy;
    if line_len_sq < f64::EPSILON {
        // Line is a point
        return point.distance(line_start);
    }

    // Area of triangle * 2 / base = height
    let area2 = ((point.x - line_start.x) * dy - (point.y - line_start.y) * dx).abs();
    area2 / line_len_sq.sqrt()
}

/// Maximum perpendicular deviation of the interior points from the chord
/// between the first and last point. Zero for fewer than three points.
pub fn max_chord_deviation(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let first = points[0];
    let last = points[points.len() - 1];

    points[1..points.len() - 1]
        .iter()
        .map(|p| perpendicular_distance(*p, first, last))
        .fold(0.0, f64::max)
}

/// Whether both coordinates are finite. Samples failing this check are
/// dropped at ingestion rather than failing the whole gesture.
pub fn is_finite(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);

        assert!((point_to_segment_dist(Point::new(50.0, 10.0), a, b) - 10.0).abs() < 1e-9);
        // Beyond the segment end, distance is to the endpoint
        assert!((point_to_segment_dist(Point::new(110.0, 0.0), a, b) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_segment_distance_degenerate() {
        let a = Point::new(5.0, 5.0);
        let d = point_to_segment_dist(Point::new(8.0, 9.0), a, a);
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_perpendicular_distance() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(10.0, 0.0);
        let d = perpendicular_distance(Point::new(5.0, 3.0), start, end);
        assert!((d - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_chord_deviation() {
        let straight = [
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.1),
            Point::new(10.0, 0.0),
        ];
        assert!(max_chord_deviation(&straight) < 0.2);

        let bent = [
            Point::new(0.0, 0.0),
            Point::new(5.0, 8.0),
            Point::new(10.0, 0.0),
        ];
        assert!((max_chord_deviation(&bent) - 8.0).abs() < 1e-9);

        assert_eq!(max_chord_deviation(&straight[..2]), 0.0);
    }

    #[test]
    fn test_is_finite() {
        assert!(is_finite(Point::new(1.0, -2.5)));
        assert!(!is_finite(Point::new(f64::NAN, 0.0)));
        assert!(!is_finite(Point::new(0.0, f64::INFINITY)));
    }
}
