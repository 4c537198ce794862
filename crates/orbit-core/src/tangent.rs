//! Tangent construction from a fixed start point onto the orbit circle

use crate::constants::EPS;
use crate::orbit::{OrbitDirection, OrbitSpec};
use crate::point::StagePoint;
use glam::DVec2;

/// Tangent entry for one object
#[derive(Clone, Copy, Debug)]
pub struct TangentSolution {
    /// Tangent point on the circle (the start itself in the degenerate case)
    pub point: StagePoint,
    /// Orbit parameter at the tangent point
    pub phi: f64,
    /// Straight-line distance from start to tangent point
    pub line_distance: f64,
    /// Start was on or inside the circle; the entry collapsed to the
    /// radial projection and the linear leg has zero length
    pub is_degenerate: bool,
}

/// Unit tangent vector at orbit parameter `phi`, pointing along the travel
/// direction (y-down coordinates).
fn travel_tangent(direction: OrbitDirection, phi: f64) -> DVec2 {
    match direction {
        OrbitDirection::CounterClockwise => DVec2::new(-phi.sin(), -phi.cos()),
        OrbitDirection::Clockwise => DVec2::new(phi.sin(), phi.cos()),
    }
}

/// Tangent point from `start` to the orbit circle, honoring the orbit's
/// travel direction.
///
/// A start on the circle (within EPS) yields a zero-length entry at the
/// start itself; a start strictly inside snaps to its radial projection.
/// Neither is an error: the solver treats both as an immediate on-orbit
/// entry. A start outside has two geometric tangents; the one whose tangent
/// vector points away from the approach segment is discarded, and if the
/// alignment test keeps neither, the closer candidate wins.
pub fn tangent_from_point(start: StagePoint, orbit: &OrbitSpec) -> TangentSolution {
    let d = start.distance_to(orbit.center);
    let phi_radial = orbit.radial_angle(start);

    // Numerically on the circle
    if (d - orbit.radius).abs() <= EPS {
        return TangentSolution {
            point: start,
            phi: phi_radial,
            line_distance: 0.0,
            is_degenerate: true,
        };
    }

    // Strictly inside: no real tangent exists
    if d < orbit.radius - EPS {
        return TangentSolution {
            point: orbit.point_at(phi_radial),
            phi: phi_radial,
            line_distance: 0.0,
            is_degenerate: true,
        };
    }

    // Right-triangle construction: both candidates sit acos(r/d) off the
    // center-to-start bearing
    let alpha = (orbit.radius / d).acos();
    let candidates = [phi_radial - alpha, phi_radial + alpha];

    let aligned = |phi: f64| {
        let t = orbit.point_at(phi);
        let approach = t.to_vec() - start.to_vec();
        travel_tangent(orbit.direction, phi).dot(approach) > 0.0
    };

    let closest = |pool: &[f64]| {
        let mut best = pool[0];
        let mut best_dist = start.distance_to(orbit.point_at(best));
        for &phi in &pool[1..] {
            let dist = start.distance_to(orbit.point_at(phi));
            if dist < best_dist {
                best = phi;
                best_dist = dist;
            }
        }
        best
    };

    let survivors: Vec<f64> = candidates.iter().copied().filter(|&p| aligned(p)).collect();
    let phi = if survivors.is_empty() {
        closest(&candidates)
    } else {
        closest(&survivors)
    };

    let point = orbit.point_at(phi);
    TangentSolution {
        point,
        phi,
        line_distance: start.distance_to(point),
        is_degenerate: false,
    }
}
