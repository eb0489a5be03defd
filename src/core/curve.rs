use std::fmt::Write as _;

use smallvec::SmallVec;

use crate::core::types::Point;

/// Tension parameter of the centripetal Catmull-Rom interpolation.
pub const CATMULL_ROM_ALPHA: f64 = 0.5;

const EPSILON: f64 = 1e-12;

/// Smooth path through an ordered point sequence, as an SVG path string.
///
/// Produces a centripetal Catmull-Rom spline (alpha 0.5) rendered as cubic
/// Bezier segments, matching D3's `curveCatmullRom` output. Degenerate inputs
/// never fail: zero points yield an empty string, a single point a bare move,
/// two points a straight segment.
#[must_use]
pub fn catmull_rom_path(points: &[Point]) -> String {
    catmull_rom_path_with_alpha(points, CATMULL_ROM_ALPHA)
}

#[must_use]
pub fn catmull_rom_path_with_alpha(points: &[Point], alpha: f64) -> String {
    let mut out = String::new();
    let Some(first) = points.first() else {
        return out;
    };
    let _ = write!(out, "M{},{}", first.x, first.y);
    match points.len() {
        1 => return out,
        2 => {
            let _ = write!(out, "L{},{}", points[1].x, points[1].y);
            return out;
        }
        _ => {}
    }

    // Duplicated endpoints give every interior segment a full four-point
    // window; the zero-length virtual chords drop out of the control-point
    // adjustment below.
    let mut extended: SmallVec<[Point; 16]> = SmallVec::with_capacity(points.len() + 2);
    extended.push(points[0]);
    extended.extend_from_slice(points);
    extended.push(points[points.len() - 1]);

    for window in extended.windows(4) {
        let [p0, p1, p2, p3] = [window[0], window[1], window[2], window[3]];
        let (c1, c2) = control_points(p0, p1, p2, p3, alpha);
        let _ = write!(
            out,
            "C{},{},{},{},{},{}",
            c1.x, c1.y, c2.x, c2.y, p2.x, p2.y
        );
    }

    out
}

// D3 parameterizes chord lengths as `l_2a = |d|^2a` with `l_a = sqrt(l_2a)`,
// and adjusts the second control point from the unadjusted `p1`.
fn control_points(p0: Point, p1: Point, p2: Point, p3: Point, alpha: f64) -> (Point, Point) {
    let l01_2a = chord(p0, p1, alpha);
    let l12_2a = chord(p1, p2, alpha);
    let l23_2a = chord(p2, p3, alpha);
    let l01_a = l01_2a.sqrt();
    let l12_a = l12_2a.sqrt();
    let l23_a = l23_2a.sqrt();

    let mut c1 = p1;
    if l01_a > EPSILON {
        let a = 2.0 * l01_2a + 3.0 * l01_a * l12_a + l12_2a;
        let n = 3.0 * l01_a * (l01_a + l12_a);
        if n != 0.0 && n.is_finite() {
            c1 = Point::new(
                (p1.x * a - p0.x * l12_2a + p2.x * l01_2a) / n,
                (p1.y * a - p0.y * l12_2a + p2.y * l01_2a) / n,
            );
        }
    }

    let mut c2 = p2;
    if l23_a > EPSILON {
        let b = 2.0 * l23_2a + 3.0 * l23_a * l12_a + l12_2a;
        let m = 3.0 * l23_a * (l23_a + l12_a);
        if m != 0.0 && m.is_finite() {
            c2 = Point::new(
                (p2.x * b + p1.x * l23_2a - p3.x * l12_2a) / m,
                (p2.y * b + p1.y * l23_2a - p3.y * l12_2a) / m,
            );
        }
    }

    (c1, c2)
}

fn chord(a: Point, b: Point, alpha: f64) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).powf(alpha)
}
