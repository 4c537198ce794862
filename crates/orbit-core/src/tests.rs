use crate::angle::*;
use crate::ease::*;
use crate::orbit::*;
use crate::point::StagePoint;
use crate::tangent::*;
use std::f64::consts::PI;

fn production_orbit(direction: OrbitDirection) -> OrbitSpec {
    OrbitSpec::new(StagePoint::new(400.0, 200.0), 240.0, direction)
}

#[test]
fn test_tangent_point_lies_on_circle() {
    let starts = [
        StagePoint::new(160.0, 310.0),
        StagePoint::new(160.0, 500.0),
        StagePoint::new(160.0, 690.0),
        StagePoint::new(700.0, 50.0),
        StagePoint::new(20.0, 20.0),
    ];

    for direction in [OrbitDirection::Clockwise, OrbitDirection::CounterClockwise] {
        let orbit = production_orbit(direction);
        for start in starts {
            let sol = tangent_from_point(start, &orbit);
            let dist = sol.point.distance_to(orbit.center);
            assert!(
                (dist - orbit.radius).abs() < 1e-9,
                "tangent point off circle: {} vs {}",
                dist,
                orbit.radius
            );
            assert!(!sol.is_degenerate);
            assert!(sol.line_distance > 0.0);
        }
    }
}

#[test]
fn test_tangent_segment_does_not_cross_interior() {
    let orbit = production_orbit(OrbitDirection::Clockwise);
    let starts = [
        StagePoint::new(160.0, 310.0),
        StagePoint::new(160.0, 690.0),
        StagePoint::new(750.0, 420.0),
    ];

    for start in starts {
        let sol = tangent_from_point(start, &orbit);
        // Sample along the segment; every point must stay at or outside the
        // circle (up to tolerance at the tangent point itself)
        for i in 0..=100 {
            let p = start.lerp(sol.point, i as f64 / 100.0);
            assert!(
                p.distance_to(orbit.center) >= orbit.radius - 1e-6,
                "segment dips inside the circle at {:?}",
                p
            );
        }
    }
}

#[test]
fn test_tangent_production_geometry() {
    // The column start directly below the leftmost circle point has its
    // tangent at 9 o'clock exactly (phi = −π, shared x)
    let orbit = production_orbit(OrbitDirection::Clockwise);
    let sol = tangent_from_point(StagePoint::new(160.0, 310.0), &orbit);

    assert!((sol.point.x - 160.0).abs() < 1e-9);
    assert!((sol.point.y - 200.0).abs() < 1e-9);
    assert!((sol.phi.abs() - PI).abs() < 1e-9);
    assert!((sol.line_distance - 110.0).abs() < 1e-9);
}

#[test]
fn test_tangent_on_circle_degenerates_to_start() {
    let orbit = production_orbit(OrbitDirection::Clockwise);
    let start = StagePoint::new(160.0, 200.0); // exactly radius away

    let sol = tangent_from_point(start, &orbit);
    assert!(sol.is_degenerate);
    assert!(sol.line_distance.abs() < 1e-12);
    assert_eq!(sol.point, start);
}

#[test]
fn test_tangent_inside_snaps_to_radial_projection() {
    let orbit = production_orbit(OrbitDirection::CounterClockwise);
    let start = StagePoint::new(400.0, 100.0); // 100 px above center

    let sol = tangent_from_point(start, &orbit);
    assert!(sol.is_degenerate);
    assert!((sol.point.distance_to(orbit.center) - orbit.radius).abs() < 1e-9);
    // Radial projection keeps the bearing: straight up is phi = π/2
    assert!((sol.phi - PI / 2.0).abs() < 1e-9);
}

#[test]
fn test_tangent_at_center_does_not_panic() {
    let orbit = production_orbit(OrbitDirection::Clockwise);
    let sol = tangent_from_point(orbit.center, &orbit);

    assert!(sol.is_degenerate);
    assert!((sol.point.distance_to(orbit.center) - orbit.radius).abs() < 1e-9);
}

#[test]
fn test_angular_difference_wraps() {
    assert!((angular_difference(0.1, 2.0 * PI - 0.1) - 0.2).abs() < 1e-12);
    assert!((angular_difference(2.0 * PI - 0.1, 0.1) + 0.2).abs() < 1e-12);
    assert!(angular_difference(1.0, 1.0).abs() < 1e-12);
    // Result stays in (−π, π]
    assert!((angular_difference(0.0, PI).abs() - PI).abs() < 1e-12);
}

#[test]
fn test_signed_arc_directions() {
    let ccw = signed_arc(OrbitDirection::CounterClockwise, 0.0, PI / 2.0);
    assert!((ccw - PI / 2.0).abs() < 1e-12);

    let cw = signed_arc(OrbitDirection::Clockwise, 0.0, PI / 2.0);
    assert!((cw + 3.0 * PI / 2.0).abs() < 1e-12);

    // Counter-clockwise sweep is never negative
    let wrap = signed_arc(OrbitDirection::CounterClockwise, PI / 2.0, 0.0);
    assert!((wrap - 3.0 * PI / 2.0).abs() < 1e-12);
}

#[test]
fn test_normalize_angle_range() {
    for a in [-7.0, -PI, -0.1, 0.0, 0.1, PI, 7.0, 20.0] {
        let n = normalize_angle(a);
        assert!((0.0..2.0 * PI).contains(&n), "{} normalized to {}", a, n);
        assert!(angular_difference(n, a).abs() < 1e-9);
    }
}

#[test]
fn test_point_at_is_y_down() {
    let orbit = production_orbit(OrbitDirection::CounterClockwise);

    // 12 o'clock: above the center on screen
    let top = orbit.point_at(PI / 2.0);
    assert!((top.x - 400.0).abs() < 1e-9);
    assert!((top.y - (200.0 - 240.0)).abs() < 1e-9);

    // Radial angle inverts point_at
    let theta = -2.3;
    let p = orbit.point_at(theta);
    assert!(angular_difference(orbit.radial_angle(p), theta).abs() < 1e-9);
}

#[test]
fn test_quintic_blend_boundary_conditions() {
    for k in [1.0, 2.0, 4.0] {
        assert!(quintic_blend(0.0, k).abs() < 1e-12);
        assert!((quintic_blend(1.0, k) - 1.0).abs() < 1e-12);

        // Starts at rest, hands off at slope k
        let h = 1e-6;
        let slope_start = quintic_blend(h, k) / h;
        let slope_end = (quintic_blend(1.0, k) - quintic_blend(1.0 - h, k)) / h;
        assert!(slope_start.abs() < 1e-4, "k={}: start slope {}", k, slope_start);
        assert!((slope_end - k).abs() < 1e-4, "k={}: end slope {}", k, slope_end);
    }
}

#[test]
fn test_easing_endpoints() {
    assert!(smoothstep(-1.0).abs() < 1e-12);
    assert!((smoothstep(2.0) - 1.0).abs() < 1e-12);
    assert!((smoothstep(0.5) - 0.5).abs() < 1e-12);

    assert!(ease_out_quart(0.0).abs() < 1e-12);
    assert!((ease_out_quart(1.0) - 1.0).abs() < 1e-12);

    // Reversed ranges map 1 → 0 and 0 → 1
    assert!((inv_lerp_signed(1.0, 0.0, 0.25) - 0.75).abs() < 1e-12);
    assert!((inv_lerp(0.16, 1.0, 1.0) - 1.0).abs() < 1e-12);
}
