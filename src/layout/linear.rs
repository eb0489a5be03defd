use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::core::curve::catmull_rom_path;
use crate::core::labels::place_labels;
use crate::core::magnitude::MagnitudeScale;
use crate::core::path::points_to_path;
use crate::core::place::{PersonSettings, Place, PlaceIndex, distances_by_place, max_distance};
use crate::core::record::{NormalizedEvent, TrajectoryRecord, normalize_events};
use crate::core::scale::TemporalScale;
use crate::core::types::Point;
use crate::error::TimelineResult;
use crate::layout::color::{ColorResolver, place_type_colors};
use crate::layout::config::TimelineConfig;
use crate::layout::scene::{
    LabelPrimitive, MarkerPrimitive, PathPrimitive, Scene, TextAnchor, TextPrimitive,
};
use crate::layout::{
    AXIS_TICK_STROKE, DATE_LABEL_COLOR, ORDINAL_TEXT_COLOR, TRAIL_STROKE, TRAIL_STROKE_WIDTH,
    TRANSITION_STROKE_WIDTH, transition_wave,
};

/// Linear timeline pass: time as x, distance as y.
///
/// Scene coordinates are plot-local: the origin sits at the top-left corner
/// of the margined plot area, with y growing downward.
#[derive(Debug, Clone)]
pub struct LinearLayout {
    config: TimelineConfig,
}

impl LinearLayout {
    pub fn new(config: TimelineConfig) -> TimelineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Builds the scene for one person's trajectory records.
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

        let x_scale = TemporalScale::linear(first.date, last.date, self.config.plot_width())?;
        let y_scale = MagnitudeScale::new(
            max_distance(&distances).unwrap_or(0.0),
            0.0,
            self.config.plot_height(),
            exponent,
        )?;
        let colors = ColorResolver::new(place_type_colors())
            .with_palette_names(places.iter().map(|place| place.name.as_str()));

        let y_of = |id: &str| -> Option<f64> { distances.get(id).map(|d| y_scale.map(*d)) };

        self.push_guide_lines(&mut scene, &index, &distances, &y_scale, &colors);
        self.push_axis_ticks(&mut scene, &x_scale);
        self.push_trail(&mut scene, &events, &x_scale, &y_of);
        self.push_transitions(&mut scene, &events, &index, &colors, &x_scale, &y_of);
        self.push_labels(&mut scene, &index, &distances, y_scale, &colors)?;

        scene.validate()?;
        Ok(scene)
    }

    /// Horizontal guide per known place at its scaled vertical position.
    fn push_guide_lines(
        &self,
        scene: &mut Scene,
        index: &PlaceIndex<'_>,
        distances: &IndexMap<String, f64>,
        y_scale: &MagnitudeScale,
        colors: &ColorResolver,
    ) {
        let plot_width = self.config.plot_width();
        let mut sorted: Vec<(&String, &f64)> = distances.iter().collect();
        sorted.sort_by_key(|(_, distance)| OrderedFloat(**distance));

        for (id, distance) in sorted {
            let Ok(place) = index.get(id) else {
                continue;
            };
            let y = y_scale.map(*distance);
            scene.paths.push(PathPrimitive::new(
                points_to_path(&[Point::new(0.0, y), Point::new(plot_width, y)]),
                colors.for_place_type(place),
                1.0,
            ));
        }
    }

    /// Year ticks along the top edge, standing in for a full time axis.
    fn push_axis_ticks(&self, scene: &mut Scene, x_scale: &TemporalScale) {
        for tick in x_scale.year_ticks() {
            let x = x_scale.map(tick);
            scene.paths.push(PathPrimitive::new(
                points_to_path(&[Point::new(x, -4.0), Point::new(x, 0.0)]),
                AXIS_TICK_STROKE,
                1.0,
            ));
            scene.texts.push(
                TextPrimitive::new(tick.format("%Y").to_string(), x, -8.0, DATE_LABEL_COLOR)
                    .anchored(TextAnchor::Middle),
            );
        }
    }

    fn push_trail(
        &self,
        scene: &mut Scene,
        events: &[NormalizedEvent],
        x_scale: &TemporalScale,
        y_of: &impl Fn(&str) -> Option<f64>,
    ) {
        let trail_points: Vec<Point> = events
            .iter()
            .filter_map(|event| {
                let y = y_of(&event.source_id)?;
                Some(Point::new(x_scale.map(event.date), y))
            })
            .collect();

        let d = catmull_rom_path(&trail_points);
        if !d.is_empty() {
            scene
                .paths
                .push(PathPrimitive::new(d, TRAIL_STROKE, TRAIL_STROKE_WIDTH));
        }
    }

    /// One wave per transition, spanning from an event's source position to
    /// its target position at the next event's time, plus ordinal markers.
    fn push_transitions(
        &self,
        scene: &mut Scene,
        events: &[NormalizedEvent],
        index: &PlaceIndex<'_>,
        colors: &ColorResolver,
        x_scale: &TemporalScale,
        y_of: &impl Fn(&str) -> Option<f64>,
    ) {
        for (i, event) in events.iter().enumerate() {
            let x_source = x_scale.map(event.date);
            let x_target = events
                .get(i + 1)
                .map_or(x_source, |next| x_scale.map(next.date));
            let source_y = y_of(&event.source_id);
            let target_y = y_of(&event.target_id);

            let source_color = index
                .get(&event.source_id)
                .map_or(ORDINAL_TEXT_COLOR, |place| colors.for_place_type(place));
            let target_color = index
                .get(&event.target_id)
                .map_or(ORDINAL_TEXT_COLOR, |place| colors.for_place_type(place));

            let is_endpoint = i == 0 || i == events.len() - 1;
            if let Some(y) = source_y {
                if is_endpoint {
                    scene.texts.push(
                        TextPrimitive::new(
                            (i + 1).to_string(),
                            if i == 0 { x_source - 10.0 } else { x_source + 5.0 },
                            y - 10.0,
                            ORDINAL_TEXT_COLOR,
                        )
                        .anchored(if i == 0 { TextAnchor::End } else { TextAnchor::Middle })
                        .emphasized(),
                    );
                    scene.markers.push(MarkerPrimitive {
                        center: Point::new(x_source, y),
                        radius: 8.0,
                        fill: source_color.to_owned(),
                    });
                } else {
                    scene.texts.push(
                        TextPrimitive::new(
                            (i + 1).to_string(),
                            x_source + 5.0,
                            y - 5.0,
                            ORDINAL_TEXT_COLOR,
                        )
                        .anchored(TextAnchor::Middle),
                    );
                }
            }

            if i == events.len() - 1 {
                continue;
            }
            let (Some(y_from), Some(y_to)) = (source_y, target_y) else {
                continue;
            };
            let source = Point::new(x_source, y_from);
            let target = Point::new(x_target, y_to);
            if let Some(points) = transition_wave(
                source,
                target,
                self.config.wave_tiers.params_for(event.accuracy),
            ) {
                scene.paths.push(PathPrimitive::new(
                    points_to_path(&points),
                    target_color,
                    TRANSITION_STROKE_WIDTH,
                ));
            }
            scene.markers.push(MarkerPrimitive {
                center: target,
                radius: 3.0,
                fill: target_color.to_owned(),
            });
        }
    }

    /// Collision-free place labels down the left edge, with leader geometry
    /// back to each true axis position.
    fn push_labels(
        &self,
        scene: &mut Scene,
        index: &PlaceIndex<'_>,
        distances: &IndexMap<String, f64>,
        y_scale: MagnitudeScale,
        colors: &ColorResolver,
    ) -> TimelineResult<()> {
        let entries: Vec<(Place, f64)> = distances
            .iter()
            .filter_map(|(id, distance)| {
                index.get(id).ok().map(|place| (place.clone(), *distance))
            })
            .collect();

        let placed = place_labels(&entries, y_scale, self.config.min_label_height)?;
        for label in placed {
            let color = colors.for_place_type(&label.place).to_owned();
            let connector = label.connector(self.config.label_connector_run);
            scene.labels.push(LabelPrimitive {
                label,
                color,
                connector,
            });
        }
        Ok(())
    }
}
