use std::fmt::Write as _;

use crate::core::types::Point;

/// Serializes an ordered point sequence as a move-then-line path string
/// (`M x y L x y ...`). Empty input yields an empty string.
///
/// No smoothing happens here; smooth trails go through
/// [`crate::core::curve::catmull_rom_path`] instead.
#[must_use]
pub fn points_to_path(points: &[Point]) -> String {
    let mut out = String::new();
    let Some(first) = points.first() else {
        return out;
    };
    let _ = write!(out, "M {} {}", first.x, first.y);
    for point in &points[1..] {
        let _ = write!(out, " L {} {}", point.x, point.y);
    }
    out
}
