use std::f64::consts::PI;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::core::curve::catmull_rom_path;
use crate::core::magnitude::MagnitudeScale;
use crate::core::path::points_to_path;
use crate::core::place::{
    HOME_PLACE_ID, PersonSettings, Place, PlaceIndex, distances_by_place, max_distance,
};
use crate::core::record::{NormalizedEvent, TrajectoryRecord, normalize_events};
use crate::core::scale::TemporalScale;
use crate::core::types::Point;
use crate::error::TimelineResult;
use crate::layout::color::{ColorResolver, place_type_colors};
use crate::layout::config::TimelineConfig;
use crate::layout::scene::{
    MarkerPrimitive, PathPrimitive, RingPrimitive, Scene, TextAnchor, TextPrimitive,
};
use crate::layout::{
    DATE_LABEL_COLOR, LEADER_STROKE, ORDINAL_TEXT_COLOR, TRAIL_STROKE, TRAIL_STROKE_WIDTH,
    TRANSITION_STROKE_WIDTH, TYPE_TEXT_COLOR, YEAR_SPOKE_STROKE, transition_wave,
};

/// Samples per inter-trajectory connector arc.
const ARC_SAMPLES: usize = 32;

/// Resolved polar position of one place at one date.
#[derive(Debug, Clone, Copy)]
struct PolarPosition {
    point: Point,
    radius: f64,
    angle: f64,
}

/// Circular timeline pass: time as angle, distance as radius.
///
/// Scene coordinates are centered on the circle origin; consumers translate
/// by their own center offset before drawing.
#[derive(Debug, Clone)]
pub struct CircularLayout {
    config: TimelineConfig,
}

impl CircularLayout {
    pub fn new(config: TimelineConfig) -> TimelineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Builds the scene for one person's trajectory records.
    ///
    /// An unparseable date aborts the whole pass; a place missing from the
    /// table degrades to missing geometry for the affected events.
    pub fn build(
        &self,
        records: &[TrajectoryRecord],
        places: &[Place],
        settings: Option<&PersonSettings>,
    ) -> TimelineResult<Scene> {
        let mut scene = Scene::new(self.config.width, self.config.height);
        let events = normalize_events(records)?;
        let Some((first, last)) = events.first().zip(events.last()) else {
            return Ok(scene);
        };

        let index = PlaceIndex::new(places);
        let distances = distances_by_place(&events, &index);
        let exponent = settings
            .map(PersonSettings::exponent_or_default)
            .unwrap_or(self.config.default_exponent);

        let outer_radius = self.config.outer_radius();
        let radius_scale = MagnitudeScale::new(
            max_distance(&distances).unwrap_or(0.0),
            self.config.min_radius,
            outer_radius,
            exponent,
        )?;
        let angle_scale = TemporalScale::circular(first.date, last.date)?;
        let colors = ColorResolver::new(place_type_colors())
            .with_palette_names(places.iter().map(|place| place.name.as_str()));

        let position = |id: &str, event: &NormalizedEvent| -> Option<PolarPosition> {
            let distance = distances.get(id)?;
            let radius = radius_scale.map(*distance);
            let angle = angle_scale.map(event.date);
            Some(PolarPosition {
                point: Point::new(radius * angle.cos(), radius * angle.sin()),
                radius,
                angle,
            })
        };

        self.push_place_rings(&mut scene, &index, &distances, &radius_scale, &colors);
        self.push_trail(&mut scene, &events, &position);
        self.push_transitions(&mut scene, &events, &index, &colors, &position);
        self.push_connector_arcs(&mut scene, &events, &index, &colors, &position);
        self.push_event_marks(&mut scene, &events, &index, &colors, &position, outer_radius);
        self.push_year_spokes(&mut scene, &angle_scale, outer_radius);

        scene.validate()?;
        Ok(scene)
    }

    /// Concentric dashed ring per known place, with a stacked label column
    /// above the circle linked by a radial stem.
    fn push_place_rings(
        &self,
        scene: &mut Scene,
        index: &PlaceIndex<'_>,
        distances: &IndexMap<String, f64>,
        radius_scale: &MagnitudeScale,
        colors: &ColorResolver,
    ) {
        let outer_radius = self.config.outer_radius();
        let mut sorted: Vec<(&String, &f64)> = distances.iter().collect();
        sorted.sort_by_key(|(_, distance)| OrderedFloat(**distance));

        for (i, (id, distance)) in sorted.into_iter().enumerate() {
            let Ok(place) = index.get(id) else {
                continue;
            };
            let radius = radius_scale.map(*distance);
            let color = colors.for_place_name(&place.name);
            let stem_x = -radius;
            let stem_y = -(outer_radius + (i + 1) as f64 * self.config.ring_label_step);

            scene.rings.push(RingPrimitive {
                center: Point::new(0.0, 0.0),
                radius,
                stroke: color.to_owned(),
                dashed: true,
            });
            scene.paths.push(
                PathPrimitive::new(
                    points_to_path(&[Point::new(stem_x, stem_y), Point::new(stem_x, 0.0)]),
                    color,
                    1.0,
                )
                .dashed(),
            );
            scene.markers.push(MarkerPrimitive {
                center: Point::new(stem_x, stem_y),
                radius: 3.0,
                fill: color.to_owned(),
            });
            // A blank name or type degrades to a missing label.
            let name = place.name.trim();
            if !name.is_empty() {
                scene.texts.push(
                    TextPrimitive::new(
                        name.to_owned(),
                        stem_x + 10.0,
                        stem_y,
                        ORDINAL_TEXT_COLOR,
                    )
                    .emphasized(),
                );
            }
            let place_type = place.place_type.trim();
            if place.id != HOME_PLACE_ID && !place_type.is_empty() {
                scene.texts.push(TextPrimitive::new(
                    place_type.to_owned(),
                    stem_x + 10.0,
                    stem_y + 15.0,
                    TYPE_TEXT_COLOR,
                ));
            }
        }
    }

    fn push_trail(
        &self,
        scene: &mut Scene,
        events: &[NormalizedEvent],
        position: &impl Fn(&str, &NormalizedEvent) -> Option<PolarPosition>,
    ) {
        let trail_points: Vec<Point> = events
            .iter()
            .flat_map(|event| {
                [
                    position(&event.source_id, event),
                    position(&event.target_id, event),
                ]
            })
            .flatten()
            .map(|polar| polar.point)
            .collect();

        let d = catmull_rom_path(&trail_points);
        if !d.is_empty() {
            scene
                .paths
                .push(PathPrimitive::new(d, TRAIL_STROKE, TRAIL_STROKE_WIDTH));
        }
    }

    /// One radial wave per event, from its source ring to its target ring.
    fn push_transitions(
        &self,
        scene: &mut Scene,
        events: &[NormalizedEvent],
        index: &PlaceIndex<'_>,
        colors: &ColorResolver,
        position: &impl Fn(&str, &NormalizedEvent) -> Option<PolarPosition>,
    ) {
        for event in events {
            let (Some(source), Some(target)) = (
                position(&event.source_id, event),
                position(&event.target_id, event),
            ) else {
                continue;
            };
            let Some(points) = transition_wave(
                source.point,
                target.point,
                self.config.wave_tiers.params_for(event.accuracy),
            ) else {
                continue;
            };
            let color = index
                .get(&event.target_id)
                .map_or(ORDINAL_TEXT_COLOR, |place| colors.for_place_name(&place.name));
            scene.paths.push(PathPrimitive::new(
                points_to_path(&points),
                color,
                TRANSITION_STROKE_WIDTH,
            ));
        }
    }

    /// Connector between each trajectory's target and the next one's source,
    /// sampled as a polar interpolation so it renders as an arc.
    fn push_connector_arcs(
        &self,
        scene: &mut Scene,
        events: &[NormalizedEvent],
        index: &PlaceIndex<'_>,
        colors: &ColorResolver,
        position: &impl Fn(&str, &NormalizedEvent) -> Option<PolarPosition>,
    ) {
        for pair in events.windows(2) {
            let [previous, current] = [&pair[0], &pair[1]];
            let (Some(from), Some(to)) = (
                position(&previous.target_id, previous),
                position(&current.source_id, current),
            ) else {
                continue;
            };
            if from.radius == to.radius && from.angle == to.angle {
                continue;
            }

            let mut points = Vec::with_capacity(ARC_SAMPLES + 1);
            for step in 0..=ARC_SAMPLES {
                let t = step as f64 / ARC_SAMPLES as f64;
                let radius = from.radius + (to.radius - from.radius) * t;
                let angle = from.angle + (to.angle - from.angle) * t;
                points.push(Point::new(radius * angle.cos(), radius * angle.sin()));
            }

            let color = index
                .get(&current.target_id)
                .map_or(ORDINAL_TEXT_COLOR, |place| colors.for_place_name(&place.name));
            scene.paths.push(PathPrimitive::new(
                points_to_path(&points),
                color,
                TRANSITION_STROKE_WIDTH,
            ));
        }
    }

    /// Event dots on the target ring; first and last events also carry their
    /// ordinal and an exterior date label linked by a faint leader.
    fn push_event_marks(
        &self,
        scene: &mut Scene,
        events: &[NormalizedEvent],
        index: &PlaceIndex<'_>,
        colors: &ColorResolver,
        position: &impl Fn(&str, &NormalizedEvent) -> Option<PolarPosition>,
        outer_radius: f64,
    ) {
        for (i, event) in events.iter().enumerate() {
            let Some(target) = position(&event.target_id, event) else {
                continue;
            };
            let color = index
                .get(&event.target_id)
                .map_or(ORDINAL_TEXT_COLOR, |place| colors.for_place_name(&place.name));

            scene.markers.push(MarkerPrimitive {
                center: target.point,
                radius: if i == 0 { 5.0 } else { 3.0 },
                fill: color.to_owned(),
            });

            let is_endpoint = i == 0 || i == events.len() - 1;
            if !is_endpoint {
                continue;
            }

            scene.texts.push(
                TextPrimitive::new(
                    (i + 1).to_string(),
                    target.point.x,
                    target.point.y - 20.0,
                    ORDINAL_TEXT_COLOR,
                )
                .anchored(TextAnchor::Middle)
                .emphasized(),
            );

            // Exterior anchor wobbles with the event index so consecutive
            // endpoint labels do not land on the same ring.
            let label_radius = outer_radius + (i as f64).sin() * 100.0;
            let exterior = Point::new(
                label_radius * target.angle.cos(),
                label_radius * target.angle.sin(),
            );
            let label_y = if target.angle > PI {
                exterior.y - 15.0
            } else {
                exterior.y + 15.0
            };

            scene.texts.push(
                TextPrimitive::new(
                    event.date_label.clone(),
                    exterior.x,
                    label_y,
                    DATE_LABEL_COLOR,
                )
                .anchored(TextAnchor::Middle),
            );
            scene.markers.push(MarkerPrimitive {
                center: exterior,
                radius: 2.0,
                fill: LEADER_STROKE.to_owned(),
            });
            scene.paths.push(PathPrimitive::new(
                points_to_path(&[target.point, exterior]),
                LEADER_STROKE,
                1.0,
            ));
        }
    }

    fn push_year_spokes(&self, scene: &mut Scene, angle_scale: &TemporalScale, outer_radius: f64) {
        for tick in angle_scale.year_ticks() {
            let angle = angle_scale.map(tick);
            let tip = Point::new(
                (outer_radius + 50.0) * angle.cos(),
                (outer_radius + 50.0) * angle.sin(),
            );
            scene.paths.push(PathPrimitive::new(
                points_to_path(&[Point::new(0.0, 0.0), tip]),
                YEAR_SPOKE_STROKE,
                1.0,
            ));
            scene.texts.push(
                TextPrimitive::new(
                    tick.format("%Y").to_string(),
                    tip.x,
                    tip.y,
                    DATE_LABEL_COLOR,
                )
                .anchored(TextAnchor::Middle),
            );
        }
    }
}
