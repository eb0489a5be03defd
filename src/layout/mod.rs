//! Scene assembly for the two timeline modes.
//!
//! Each layout pass is a pure function of one person's normalized events, the
//! place table and optional per-person settings; identical inputs always
//! yield identical scenes.

pub mod circular;
pub mod color;
pub mod config;
pub mod linear;
pub mod scene;

pub use circular::CircularLayout;
pub use color::{ColorResolver, place_type_colors};
pub use config::{TimelineConfig, WaveTierTable};
pub use linear::LinearLayout;
pub use scene::{
    LabelPrimitive, MarkerPrimitive, PathPrimitive, RingPrimitive, Scene, TextAnchor,
    TextPrimitive,
};

use tracing::debug;

use crate::core::types::Point;
use crate::core::wave::{WaveParams, directed_wave_to_target};

/// Faint wide guide stroke drawn beneath the discrete per-event strokes.
pub const TRAIL_STROKE: &str = "#0B032D18";
pub const TRAIL_STROKE_WIDTH: f64 = 10.0;
pub const TRANSITION_STROKE_WIDTH: f64 = 2.0;

pub(crate) const DATE_LABEL_COLOR: &str = "#00000099";
pub(crate) const LEADER_STROKE: &str = "#00000025";
pub(crate) const YEAR_SPOKE_STROKE: &str = "#00000015";
pub(crate) const AXIS_TICK_STROKE: &str = "#00000040";
pub(crate) const ORDINAL_TEXT_COLOR: &str = "#000000";
pub(crate) const TYPE_TEXT_COLOR: &str = "#808080";

/// Wave stroke between two event coordinates.
///
/// A zero-length transition (same place at the same instant) carries no
/// geometry and is skipped; an offset that would overshoot the short hop is
/// dropped rather than surfaced, since tier parameters are tuned for typical
/// distances, not per segment.
pub(crate) fn transition_wave(
    source: Point,
    target: Point,
    mut params: WaveParams,
) -> Option<Vec<Point>> {
    let distance = source.distance_to(target);
    if !distance.is_finite() || distance <= 0.0 {
        debug!(?source, ?target, "skipping zero-length transition");
        return None;
    }
    if params.start_radius_offset >= distance {
        params.start_radius_offset = 0.0;
    }
    directed_wave_to_target(source, target, params).ok()
}
