use trajectory_rs::core::path::points_to_path;
use trajectory_rs::core::types::Point;

fn parse_path(d: &str) -> Vec<Point> {
    let mut points = Vec::new();
    let mut tokens = d.split_whitespace();
    while let Some(command) = tokens.next() {
        assert!(command == "M" || command == "L", "unexpected command `{command}`");
        let x: f64 = tokens.next().expect("x").parse().expect("numeric x");
        let y: f64 = tokens.next().expect("y").parse().expect("numeric y");
        points.push(Point::new(x, y));
    }
    points
}

#[test]
fn empty_input_yields_an_empty_path() {
    assert_eq!(points_to_path(&[]), "");
}

#[test]
fn single_point_yields_a_bare_move() {
    assert_eq!(points_to_path(&[Point::new(1.5, -2.0)]), "M 1.5 -2");
}

#[test]
fn polyline_moves_once_then_draws_lines() {
    let d = points_to_path(&[
        Point::new(0.0, 0.0),
        Point::new(10.0, 5.5),
        Point::new(-3.0, 4.0),
    ]);
    assert_eq!(d, "M 0 0 L 10 5.5 L -3 4");
}

#[test]
fn serialization_round_trips_exactly() {
    let points = vec![
        Point::new(0.1 + 0.2, -17.125),
        Point::new(1.0 / 3.0, 940.0),
        Point::new(2.0_f64.sqrt(), -1e-9),
    ];

    // Display prints the shortest representation that parses back to the
    // same f64, so the round trip loses nothing.
    assert_eq!(parse_path(&points_to_path(&points)), points);
}
