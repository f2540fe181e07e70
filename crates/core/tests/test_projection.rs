use assert_approx_eq::assert_approx_eq;
use galnav::{CoordinateProjector, GalacticCoordinate, ScreenCoordinate};

/// Every coordinate on a coarse grid spanning the encodable cube, corners
/// included
fn in_range_grid() -> impl Iterator<Item = GalacticCoordinate> {
    let steps = |bound: f64, n: i32| {
        (-n..=n).map(move |i| bound * i as f64 / n as f64)
    };
    steps(2047.0, 8).flat_map(move |x| {
        steps(127.0, 4).flat_map(move |y| {
            steps(2047.0, 8).map(move |z| GalacticCoordinate::new(x, y, z))
        })
    })
}

fn assert_screen_eq(actual: ScreenCoordinate, expected: (f64, f64)) {
    assert_approx_eq!(actual.x, expected.0, 1e-9);
    assert_approx_eq!(actual.y, expected.1, 1e-9);
}

#[test]
fn test_origin_is_center() {
    let origin = GalacticCoordinate::ORIGIN;
    assert_screen_eq(
        CoordinateProjector::primary_marker_position(origin),
        (0.5, 0.5),
    );
    assert_screen_eq(
        CoordinateProjector::reference_marker_position(origin),
        (0.5, 0.5),
    );
}

/// Positions that line up with the landmarks on the map image
#[test]
fn test_known_positions() {
    let corner = GalacticCoordinate::new(2047.0, 127.0, 2047.0);
    assert_screen_eq(
        CoordinateProjector::primary_marker_position(corner),
        (0.7788387679126026, 0.30283121635129673),
    );
    assert_screen_eq(
        CoordinateProjector::reference_marker_position(corner),
        (0.7788387679126026, 0.5721687836487032),
    );

    let coordinate = GalacticCoordinate::new(-1000.0, 50.0, 700.0);
    assert_screen_eq(
        CoordinateProjector::primary_marker_position(coordinate),
        (0.27992355771577887, 0.3711237852278129),
    );
    assert_screen_eq(
        CoordinateProjector::reference_marker_position(coordinate),
        (0.27992355771577887, 0.5386014276974049),
    );
}

#[test]
fn test_zero_height_markers_match() {
    for coordinate in in_range_grid().filter(|c| c.y == 0.0) {
        let positions = CoordinateProjector::marker_positions(coordinate);
        assert_eq!(
            positions.primary, positions.reference,
            "markers differ for {}",
            coordinate
        );
    }
}

#[test]
fn test_markers_differ_only_by_height() {
    for coordinate in in_range_grid() {
        let positions = CoordinateProjector::marker_positions(coordinate);
        // Height only moves the marker vertically
        assert_approx_eq!(positions.primary.x, positions.reference.x, 1e-12);
        if coordinate.y > 0.0 {
            assert!(positions.primary.y <= positions.reference.y);
        } else if coordinate.y < 0.0 {
            assert!(positions.primary.y >= positions.reference.y);
        }
    }
}

#[test]
fn test_in_range_stays_on_map() {
    for coordinate in in_range_grid() {
        let positions = CoordinateProjector::marker_positions(coordinate);
        assert!(
            positions.primary.is_on_map(),
            "primary marker for {} is off the map: {}",
            coordinate,
            positions.primary
        );
        assert!(
            positions.reference.is_on_map(),
            "reference marker for {} is off the map: {}",
            coordinate,
            positions.reference
        );
    }
}

#[test]
fn test_out_of_range_is_total() {
    let extremes = [
        GalacticCoordinate::new(2047.0 * 1.4, 127.0 * 1.4, 2047.0 * 1.4),
        GalacticCoordinate::new(1e9, -1e9, 1e9),
        GalacticCoordinate::new(-5000.0, 0.0, 0.0),
    ];
    for &coordinate in &extremes {
        let positions = CoordinateProjector::marker_positions(coordinate);
        assert!(positions.primary.x.is_finite());
        assert!(positions.primary.y.is_finite());
        assert!(positions.reference.x.is_finite());
        assert!(positions.reference.y.is_finite());
    }

    // Far along an axis, there's nothing to rescale against, so the marker
    // just runs off the edge
    let off_map = CoordinateProjector::primary_marker_position(
        GalacticCoordinate::new(-5000.0, 0.0, 0.0),
    );
    assert!(off_map.x < 0.0);
    assert!(!off_map.is_on_map());
}
