//! Encoded stroke paths.
//!
//! A stroke's geometry is persisted as a compact command string:
//! `M x,y` (moveto, first command exactly once), `L x,y` (lineto),
//! `Q cx,cy ex,ey` (quadratic), `T ex,ey` (smooth quadratic, control point
//! reflected from the previous command), and `C c1x,c1y c2x,c2y ex,ey`
//! (cubic). Coordinates carry a fixed number of fractional digits chosen
//! by the quality tier; decoders accept any number of digits and tolerate
//! whitespace around the comma inside a pair.

use kurbo::Point;
use thiserror::Error;

/// A single command of an encoded stroke path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// `M x,y` — start of the path.
    MoveTo(Point),
    /// `L x,y` — straight segment from the current point.
    LineTo(Point),
    /// `Q cx,cy ex,ey` — quadratic curve.
    QuadTo(Point, Point),
    /// `T ex,ey` — smooth quadratic curve.
    SmoothQuadTo(Point),
    /// `C c1x,c1y c2x,c2y ex,ey` — cubic curve.
    CurveTo(Point, Point, Point),
}

/// Errors raised while decoding a path string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected character '{0}' in path data")]
    UnexpectedChar(char),
    #[error("invalid coordinate '{0}' in path data")]
    InvalidCoordinate(String),
    #[error("unpaired coordinate at end of path data")]
    UnpairedCoordinate,
}

/// Serialize path segments at the given fractional-digit precision.
pub fn encode(segments: &[PathSegment], precision: usize) -> String {
    let mut out = String::new();
    let coord = |out: &mut String, p: Point| {
        out.push_str(&format!("{:.prec$},{:.prec$}", p.x, p.y, prec = precision));
    };

    for segment in segments {
        if !out.is_empty() {
            out.push(' ');
        }
        match *segment {
            PathSegment::MoveTo(p) => {
                out.push_str("M ");
                coord(&mut out, p);
            }
            PathSegment::LineTo(p) => {
                out.push_str("L ");
                coord(&mut out, p);
            }
            PathSegment::QuadTo(ctrl, end) => {
                out.push_str("Q ");
                coord(&mut out, ctrl);
                out.push(' ');
                coord(&mut out, end);
            }
            PathSegment::SmoothQuadTo(end) => {
                out.push_str("T ");
                coord(&mut out, end);
            }
            PathSegment::CurveTo(c1, c2, end) => {
                out.push_str("C ");
                coord(&mut out, c1);
                out.push(' ');
                coord(&mut out, c2);
                out.push(' ');
                coord(&mut out, end);
            }
        }
    }
    out
}

/// Extract every coordinate pair of an encoded path, in order.
///
/// Control points are returned alongside anchor points. This makes the
/// decode a deliberately approximate inverse of [`encode`]: hit-testing
/// against control points as well as anchors is conservative, which is the
/// behavior erasing wants.
pub fn decode_points(encoded: &str) -> Result<Vec<Point>, DecodeError> {
    let mut coords: Vec<f64> = Vec::new();
    let mut chars = encoded.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            'M' | 'L' | 'Q' | 'T' | 'C' | ',' => {
                chars.next();
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            '-' | '+' | '.' | '0'..='9' => {
                let mut number = String::new();
                while let Some(&d) = chars.peek() {
                    if matches!(d, '-' | '+' | '.' | '0'..='9') {
                        number.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value: f64 = number
                    .parse()
                    .map_err(|_| DecodeError::InvalidCoordinate(number.clone()))?;
                coords.push(value);
            }
            other => return Err(DecodeError::UnexpectedChar(other)),
        }
    }

    if coords.len() % 2 != 0 {
        return Err(DecodeError::UnpairedCoordinate);
    }

    Ok(coords
        .chunks(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect())
}
