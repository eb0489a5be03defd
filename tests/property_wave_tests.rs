use proptest::prelude::*;
use trajectory_rs::core::types::Point;
use trajectory_rs::core::wave::{WaveParams, directed_wave_to_target};

proptest! {
    #[test]
    fn wave_density_and_terminal_pinning_property(
        sx in -10_000.0f64..10_000.0,
        sy in -10_000.0f64..10_000.0,
        dx in -5_000.0f64..5_000.0,
        dy in -5_000.0f64..5_000.0,
        num_points in 2usize..200,
        cycles in 0.0f64..12.0,
        growth in -0.5f64..0.5,
        offset_factor in 0.0f64..0.9
    ) {
        let source = Point::new(sx, sy);
        let target = Point::new(sx + dx, sy + dy);
        let distance = source.distance_to(target);
        prop_assume!(distance > 1e-6);

        let params = WaveParams {
            start_radius_offset: offset_factor * distance,
            num_points,
            cycles_along_path: cycles,
            amplitude_growth_rate: growth,
        };
        let path = directed_wave_to_target(source, target, params).expect("valid wave");

        prop_assert_eq!(path.len(), num_points);
        prop_assert_eq!(path.last().copied(), Some(target));
        for point in &path {
            prop_assert!(point.is_finite());
        }
    }

    #[test]
    fn flat_wave_stays_on_the_chord_property(
        sx in -10_000.0f64..10_000.0,
        sy in -10_000.0f64..10_000.0,
        dx in -5_000.0f64..5_000.0,
        dy in -5_000.0f64..5_000.0,
        num_points in 2usize..200,
        cycles in 0.0f64..12.0
    ) {
        let source = Point::new(sx, sy);
        let target = Point::new(sx + dx, sy + dy);
        let distance = source.distance_to(target);
        prop_assume!(distance > 1e-3);

        let params = WaveParams {
            start_radius_offset: 0.0,
            num_points,
            cycles_along_path: cycles,
            amplitude_growth_rate: 0.0,
        };
        let path = directed_wave_to_target(source, target, params).expect("valid wave");

        for point in &path {
            let cross = (point.x - source.x) * (target.y - source.y)
                - (point.y - source.y) * (target.x - source.x);
            prop_assert!((cross / distance).abs() <= 1e-6, "drift {cross} at {point:?}");
        }
    }

    #[test]
    fn wave_progress_is_monotone_along_the_chord_property(
        sx in -10_000.0f64..10_000.0,
        sy in -10_000.0f64..10_000.0,
        dx in -5_000.0f64..5_000.0,
        dy in -5_000.0f64..5_000.0,
        num_points in 2usize..200,
        growth in -0.5f64..0.5
    ) {
        let source = Point::new(sx, sy);
        let target = Point::new(sx + dx, sy + dy);
        let distance = source.distance_to(target);
        prop_assume!(distance > 1e-3);

        let params = WaveParams {
            start_radius_offset: 0.0,
            num_points,
            cycles_along_path: 3.0,
            amplitude_growth_rate: growth,
        };
        let path = directed_wave_to_target(source, target, params).expect("valid wave");

        // Projection onto the chord advances strictly with the sample index,
        // whatever the perpendicular oscillation does.
        let ux = (target.x - source.x) / distance;
        let uy = (target.y - source.y) / distance;
        let mut previous = f64::NEG_INFINITY;
        for point in &path {
            let along = (point.x - source.x) * ux + (point.y - source.y) * uy;
            prop_assert!(along > previous - 1e-6);
            previous = along;
        }
    }
}
