use trajectory_rs::core::magnitude::MagnitudeScale;
use trajectory_rs::core::scale::{CIRCULAR_ANGLE_END, CIRCULAR_ANGLE_START, TemporalScale};

use approx::assert_abs_diff_eq;
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn circular_scale_maps_domain_ends_onto_angle_range() {
    let scale = TemporalScale::circular(date(1959, 10, 12), date(1962, 3, 5)).expect("scale");

    assert_eq!(scale.map(date(1959, 10, 12)), CIRCULAR_ANGLE_START);
    assert_abs_diff_eq!(scale.map(date(1962, 3, 5)), CIRCULAR_ANGLE_END, epsilon = 1e-12);
}

#[test]
fn linear_scale_is_affine_in_elapsed_days() {
    let scale =
        TemporalScale::linear(date(2000, 1, 1), date(2000, 1, 11), 100.0).expect("scale");

    assert_eq!(scale.map(date(2000, 1, 1)), 0.0);
    assert_abs_diff_eq!(scale.map(date(2000, 1, 6)), 50.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scale.map(date(2000, 1, 11)), 100.0, epsilon = 1e-12);
}

#[test]
fn degenerate_single_date_domain_maps_to_range_start() {
    let scale = TemporalScale::circular(date(1959, 10, 12), date(1959, 10, 12)).expect("scale");

    assert_eq!(scale.map(date(1959, 10, 12)), CIRCULAR_ANGLE_START);
    assert_eq!(scale.map(date(1980, 1, 1)), CIRCULAR_ANGLE_START);
}

#[test]
fn inverted_domain_is_rejected() {
    assert!(TemporalScale::circular(date(1962, 3, 5), date(1959, 10, 12)).is_err());
}

#[test]
fn linear_scale_requires_positive_plot_width() {
    assert!(TemporalScale::linear(date(2000, 1, 1), date(2001, 1, 1), 0.0).is_err());
    assert!(TemporalScale::linear(date(2000, 1, 1), date(2001, 1, 1), -10.0).is_err());
}

#[test]
fn year_ticks_cover_januaries_inside_the_domain() {
    let scale =
        TemporalScale::linear(date(1959, 10, 12), date(1962, 3, 5), 960.0).expect("scale");

    assert_eq!(
        scale.year_ticks(),
        vec![date(1960, 1, 1), date(1961, 1, 1), date(1962, 1, 1)]
    );
}

#[test]
fn year_ticks_exclude_a_domain_end_on_january_first() {
    let scale =
        TemporalScale::linear(date(1959, 10, 12), date(1961, 1, 1), 960.0).expect("scale");

    assert_eq!(scale.year_ticks(), vec![date(1960, 1, 1)]);
}

#[test]
fn year_ticks_include_a_domain_start_on_january_first() {
    let scale =
        TemporalScale::linear(date(1960, 1, 1), date(1961, 6, 1), 960.0).expect("scale");

    assert_eq!(scale.year_ticks(), vec![date(1960, 1, 1), date(1961, 1, 1)]);
}

#[test]
fn magnitude_scale_hits_range_ends_exactly() {
    let scale = MagnitudeScale::new(50.0, 40.0, 400.0, 0.5).expect("scale");

    assert_eq!(scale.map(0.0), 40.0);
    assert_eq!(scale.map(50.0), 400.0);
}

#[test]
fn magnitude_scale_is_monotonic() {
    let scale = MagnitudeScale::new(100.0, 0.0, 940.0, 0.5).expect("scale");

    let mut previous = scale.map(0.0);
    for step in 1..=100 {
        let current = scale.map(f64::from(step));
        assert!(current >= previous, "map must not decrease at {step}");
        previous = current;
    }
}

#[test]
fn square_root_exponent_compresses_large_distances() {
    let scale = MagnitudeScale::new(100.0, 0.0, 100.0, 0.5).expect("scale");

    // Half the domain lands well past half the range.
    assert_abs_diff_eq!(scale.map(25.0), 50.0, epsilon = 1e-12);
    assert!(scale.map(50.0) > 70.0);
}

#[test]
fn non_positive_domain_max_falls_back_to_unit_domain() {
    let scale = MagnitudeScale::new(0.0, 40.0, 400.0, 0.5).expect("scale");

    assert_eq!(scale.domain_max(), 1.0);
    assert_eq!(scale.map(0.0), 40.0);
    assert_eq!(scale.map(1.0), 400.0);
}

#[test]
fn magnitude_scale_rejects_bad_exponents() {
    assert!(MagnitudeScale::new(50.0, 0.0, 100.0, 0.0).is_err());
    assert!(MagnitudeScale::new(50.0, 0.0, 100.0, -1.0).is_err());
    assert!(MagnitudeScale::new(50.0, 0.0, 100.0, f64::NAN).is_err());
}
