use trajectory_rs::core::place::{PersonSettings, Place};
use trajectory_rs::core::record::{DateAccuracy, TrajectoryRecord};
use trajectory_rs::error::TimelineError;
use trajectory_rs::layout::{
    CircularLayout, LinearLayout, TRAIL_STROKE, TRANSITION_STROKE_WIDTH, TimelineConfig,
};

fn record(
    traj_number: i64,
    source_id: &str,
    target_id: &str,
    moving_date: &str,
    accuracy: DateAccuracy,
) -> TrajectoryRecord {
    TrajectoryRecord {
        traj_number,
        person_id: "p1".to_owned(),
        source_id: source_id.to_owned(),
        target_id: target_id.to_owned(),
        moving_date: moving_date.to_owned(),
        data_accuracy: accuracy,
        trajectory_type: None,
    }
}

fn place(id: &str, place_type: &str, distance: &str) -> Place {
    Place {
        id: id.to_owned(),
        name: id.to_owned(),
        place_type: place_type.to_owned(),
        distance: distance.to_owned(),
        lat: None,
        lng: None,
        accuracy: None,
    }
}

fn round_trip_records() -> Vec<TrajectoryRecord> {
    vec![
        record(1, "Home", "12", "12/10/1959", DateAccuracy::Day),
        record(2, "12", "Home", "12/10/1959", DateAccuracy::Day),
    ]
}

fn round_trip_places() -> Vec<Place> {
    vec![place("Home", "Home", "0"), place("12", "Sanatorium", "50")]
}

#[test]
fn same_day_round_trip_renders_on_a_degenerate_time_axis() {
    let layout = LinearLayout::new(TimelineConfig::default()).expect("layout");
    let scene = layout
        .build(&round_trip_records(), &round_trip_places(), None)
        .expect("scene");

    assert!(!scene.is_empty());
    // Both places draw a full-width guide line.
    let guides: Vec<_> = scene
        .paths
        .iter()
        .filter(|path| path.stroke_width == 1.0 && path.d.starts_with("M 0 "))
        .collect();
    assert_eq!(guides.len(), 2);

    // The single-date domain collapses every x to the range start, and the
    // wave still terminates exactly at the far place's vertical position.
    assert!(
        scene
            .paths
            .iter()
            .any(|path| path.stroke_width == TRANSITION_STROKE_WIDTH
                && path.d.ends_with("L 0 940"))
    );

    // Two labels, Home at the top, the far place clear of it.
    assert_eq!(scene.labels.len(), 2);
    assert_eq!(scene.labels[0].label.place.id, "Home");
    assert_eq!(scene.labels[0].label.y, 0.0);
    assert_eq!(scene.labels[1].label.y, 940.0);
}

#[test]
fn flattened_day_tier_draws_a_straight_transition() {
    let mut config = TimelineConfig::default();
    config.wave_tiers.day.amplitude_growth_rate = 0.0;

    let layout = LinearLayout::new(config).expect("layout");
    let scene = layout
        .build(&round_trip_records(), &round_trip_places(), None)
        .expect("scene");

    let transition = scene
        .paths
        .iter()
        .find(|path| path.stroke_width == TRANSITION_STROKE_WIDTH)
        .expect("transition stroke");
    // Vertical chord with zero growth: every sampled x stays on the axis.
    let mut tokens = transition.d.split_whitespace();
    while let Some(command) = tokens.next() {
        assert!(command == "M" || command == "L");
        let x: f64 = tokens.next().expect("x").parse().expect("numeric");
        let _y: f64 = tokens.next().expect("y").parse().expect("numeric");
        assert!(x.abs() < 1e-9, "straight vertical wave drifted to x={x}");
    }
}

#[test]
fn empty_records_yield_an_empty_scene() {
    let layout = LinearLayout::new(TimelineConfig::default()).expect("layout");
    let scene = layout.build(&[], &round_trip_places(), None).expect("scene");

    assert!(scene.is_empty());
    assert_eq!(scene.width, 1000.0);
    assert_eq!(scene.height, 1000.0);
}

#[test]
fn unknown_place_degrades_instead_of_failing() {
    let records = vec![
        record(1, "Home", "Nowhere", "12/10/1959", DateAccuracy::Day),
        record(2, "Nowhere", "Home", "05/03/1962", DateAccuracy::Day),
    ];

    let layout = LinearLayout::new(TimelineConfig::default()).expect("layout");
    let scene = layout
        .build(&records, &round_trip_places(), None)
        .expect("scene");

    // Only the known place contributes geometry.
    assert_eq!(scene.labels.len(), 1);
    assert_eq!(scene.labels[0].label.place.id, "Home");
}

#[test]
fn unparseable_date_aborts_the_pass() {
    let records = vec![record(1, "Home", "12", "October 1959", DateAccuracy::Month)];

    let layout = LinearLayout::new(TimelineConfig::default()).expect("layout");
    let error = layout
        .build(&records, &round_trip_places(), None)
        .expect_err("must fail");
    assert!(matches!(error, TimelineError::InvalidDate { traj_number: 1, .. }));
}

#[test]
fn circular_scene_carries_rings_waves_and_year_spokes() {
    let records = vec![
        record(1, "Home", "12", "12/10/1959", DateAccuracy::Day),
        record(2, "12", "27", "01/06/1960", DateAccuracy::Month),
        record(3, "27", "Home", "05/03/1962", DateAccuracy::Year),
    ];
    let places = vec![
        place("Home", "Home", "0"),
        place("12", "Sanatorium", "50"),
        place("27", "Hôpital psychiatrique", "120"),
    ];

    let layout = CircularLayout::new(TimelineConfig::default()).expect("layout");
    let scene = layout.build(&records, &places, None).expect("scene");

    // One dashed ring per resolved place, each with a dashed label stem.
    assert_eq!(scene.rings.len(), 3);
    assert!(scene.rings.iter().all(|ring| ring.dashed));
    assert_eq!(scene.paths.iter().filter(|path| path.dashed).count(), 3);
    // Rings are emitted innermost first.
    for pair in scene.rings.windows(2) {
        assert!(pair[0].radius <= pair[1].radius);
    }

    // The faint trail plus one wave per event.
    assert!(scene.paths.iter().any(|path| path.stroke == TRAIL_STROKE));
    let waves = scene
        .paths
        .iter()
        .filter(|path| path.stroke_width == TRANSITION_STROKE_WIDTH)
        .count();
    assert!(waves >= 3);

    // Year spokes for every January inside the span.
    for year in ["1960", "1961", "1962"] {
        assert!(scene.texts.iter().any(|text| text.text == year));
    }

    // Endpoint ordinals.
    assert!(scene.texts.iter().any(|text| text.text == "1" && text.emphasized));
    assert!(scene.texts.iter().any(|text| text.text == "3" && text.emphasized));
}

#[test]
fn blank_place_name_and_type_degrade_to_missing_labels() {
    let records = vec![record(1, "Home", "12", "12/10/1959", DateAccuracy::Day)];
    let places = vec![place("Home", "Home", "0"), place("12", "  ", "50")];

    let layout = CircularLayout::new(TimelineConfig::default()).expect("layout");
    let mut blank_named = places;
    blank_named[1].name = String::new();
    let scene = layout.build(&records, &blank_named, None).expect("scene");

    // The ring and its stem survive; only the unprintable labels are
    // dropped.
    assert_eq!(scene.rings.len(), 2);
    assert!(scene.texts.iter().all(|text| !text.text.trim().is_empty()));
    assert!(!scene.texts.iter().any(|text| text.text == "12"));
}

#[test]
fn ring_radii_follow_the_person_exponent() {
    let records = vec![record(1, "Home", "12", "12/10/1959", DateAccuracy::Day)];
    let places = round_trip_places();
    let layout = CircularLayout::new(TimelineConfig::default()).expect("layout");

    let settings = PersonSettings {
        person_id: "p1".to_owned(),
        exponent: "1.0".to_owned(),
    };
    let linear_scene = layout
        .build(&records, &places, Some(&settings))
        .expect("scene");
    let default_scene = layout.build(&records, &places, None).expect("scene");

    // Same outermost ring either way, but the default square-root curvature
    // only changes interior radii, which coincide here (0 and max).
    let linear_max = linear_scene
        .rings
        .iter()
        .map(|ring| ring.radius)
        .fold(0.0, f64::max);
    let default_max = default_scene
        .rings
        .iter()
        .map(|ring| ring.radius)
        .fold(0.0, f64::max);
    assert_eq!(linear_max, default_max);
    assert_eq!(linear_max, 400.0);
}

#[test]
fn non_positive_viewport_is_rejected() {
    let mut config = TimelineConfig::default();
    config.width = 0.0;
    let error = LinearLayout::new(config).expect_err("must fail");
    assert!(matches!(
        error,
        TimelineError::InvalidViewport { width, .. } if width == 0.0
    ));
}

#[test]
fn invalid_configs_are_rejected_up_front() {
    let mut config = TimelineConfig::default();
    config.margin = 500.0;
    assert!(CircularLayout::new(config).is_err());

    let mut config = TimelineConfig::default();
    config.x_margin = 600.0;
    assert!(LinearLayout::new(config).is_err());

    let mut config = TimelineConfig::default();
    config.wave_tiers.year.num_points = 1;
    assert!(LinearLayout::new(config).is_err());
}

#[test]
fn config_survives_a_serde_round_trip() {
    let config = TimelineConfig::default();
    let json = serde_json::to_string(&config).expect("serialize");
    let restored: TimelineConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, config);
}

#[test]
fn identical_inputs_yield_identical_scenes() {
    let layout = CircularLayout::new(TimelineConfig::default()).expect("layout");
    let first = layout
        .build(&round_trip_records(), &round_trip_places(), None)
        .expect("scene");
    let second = layout
        .build(&round_trip_records(), &round_trip_places(), None)
        .expect("scene");
    assert_eq!(first, second);
}
