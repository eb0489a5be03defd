use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::types::Point;
use crate::error::{TimelineError, TimelineResult};

/// Parameters of the directed wave generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    /// Distance from the source at which the visible wave begins. Must be
    /// strictly less than the source-target distance.
    pub start_radius_offset: f64,
    /// Number of generated points; at least 2.
    pub num_points: usize,
    /// Full oscillation periods across the visible path.
    pub cycles_along_path: f64,
    /// How quickly the oscillation amplitude grows with distance traveled.
    /// Zero disables oscillation growth entirely.
    pub amplitude_growth_rate: f64,
}

impl WaveParams {
    fn validate(self) -> TimelineResult<Self> {
        if self.num_points < 2 {
            return Err(TimelineError::InsufficientPoints {
                num_points: self.num_points,
            });
        }
        if !self.start_radius_offset.is_finite() || self.start_radius_offset < 0.0 {
            return Err(TimelineError::InvalidData(
                "wave start radius offset must be finite and >= 0".to_owned(),
            ));
        }
        if !self.cycles_along_path.is_finite() || self.cycles_along_path < 0.0 {
            return Err(TimelineError::InvalidData(
                "wave cycles along path must be finite and >= 0".to_owned(),
            ));
        }
        if !self.amplitude_growth_rate.is_finite() {
            return Err(TimelineError::InvalidData(
                "wave amplitude growth rate must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Directed wave from `source` to `target`, oscillating around the straight
/// connecting line with an amplitude that grows with distance traveled.
///
/// The last generated point equals `target` exactly, overriding any
/// accumulated floating error; successive segments rely on this for visual
/// continuity.
pub fn directed_wave_to_target(
    source: Point,
    target: Point,
    params: WaveParams,
) -> TimelineResult<Vec<Point>> {
    let params = params.validate()?;
    let total_distance = source.distance_to(target);
    if params.start_radius_offset >= total_distance {
        return Err(TimelineError::InvalidOffset {
            offset: params.start_radius_offset,
            distance: total_distance,
        });
    }

    let central_angle = source.direction_to(target);
    let perpendicular_angle = central_angle + FRAC_PI_2;
    let (sin_c, cos_c) = central_angle.sin_cos();
    let (sin_p, cos_p) = perpendicular_angle.sin_cos();

    let mut path = Vec::with_capacity(params.num_points);
    let last_index = (params.num_points - 1) as f64;
    for i in 0..params.num_points {
        let t = i as f64 / last_index;
        let distance_along_path =
            params.start_radius_offset + t * (total_distance - params.start_radius_offset);
        let amplitude = (distance_along_path - params.start_radius_offset)
            * params.amplitude_growth_rate;
        let oscillation = (t * params.cycles_along_path * TAU).sin();
        let perpendicular_offset = oscillation * amplitude;

        path.push(Point::new(
            source.x + distance_along_path * cos_c + perpendicular_offset * cos_p,
            source.y + distance_along_path * sin_c + perpendicular_offset * sin_p,
        ));
    }

    // The terminal point is pinned to the target, not merely close to it.
    if let Some(last) = path.last_mut() {
        *last = target;
    }
    Ok(path)
}

/// Fan-shaped variant: the direction itself spreads across
/// `beam_width_radians` centered on the source-target direction, and the
/// oscillation modulates the radius instead of the perpendicular offset.
///
/// Unlike [`directed_wave_to_target`], the beam does not terminate at the
/// target; it is a spray texture, not a connector.
pub fn directed_wave_beam(
    source: Point,
    target: Point,
    params: WaveParams,
    beam_width_radians: f64,
) -> TimelineResult<Vec<Point>> {
    let params = params.validate()?;
    if !beam_width_radians.is_finite() || beam_width_radians < 0.0 {
        return Err(TimelineError::InvalidData(
            "beam width must be finite and >= 0".to_owned(),
        ));
    }
    let total_distance = source.distance_to(target);
    if params.start_radius_offset >= total_distance {
        return Err(TimelineError::InvalidOffset {
            offset: params.start_radius_offset,
            distance: total_distance,
        });
    }

    let central_angle = source.direction_to(target);

    let mut path = Vec::with_capacity(params.num_points);
    let last_index = (params.num_points - 1) as f64;
    for i in 0..params.num_points {
        let t = i as f64 / last_index;
        let base_radius =
            params.start_radius_offset + t * (total_distance - params.start_radius_offset);
        let spread_angle = central_angle + (t - 0.5) * beam_width_radians;
        let amplitude = (base_radius - params.start_radius_offset) * params.amplitude_growth_rate;
        let oscillation = (t * params.cycles_along_path * TAU).sin();
        let radius = base_radius + oscillation * amplitude;

        path.push(Point::new(
            source.x + radius * spread_angle.cos(),
            source.y + radius * spread_angle.sin(),
        ));
    }

    Ok(path)
}
