//! Solver input parameters

use orbit_core::{OrbitDirection, OrbitSpec, StagePoint};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Number of tracked objects. The pairwise spacing equations and the
/// extra-lap thresholds are written for exactly three.
pub const OBJECT_COUNT: usize = 3;

/// Index of the bottom column object; the camera tracks it through the
/// transition.
pub const ANCHOR_INDEX: usize = 2;

/// Full input to the timeline solver
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    pub orbit: OrbitSpec,
    /// Fixed start points, top to bottom; index [`ANCHOR_INDEX`] is the
    /// camera anchor
    pub starts: [StagePoint; OBJECT_COUNT],
    /// Rotation of the final triangle (degrees)
    pub polygon_rotation_deg: f64,
    /// Linear-phase emphasis factor k: stretches the approach leg while
    /// keeping the handoff speed matched
    pub linear_emphasis: f64,
}

impl PlanConfig {
    /// Column layout: three starts stacked on one x, `spacing` px apart,
    /// with `bottom_y` the anchor.
    pub fn column(orbit: OrbitSpec, x: f64, bottom_y: f64, spacing: f64) -> Self {
        Self {
            orbit,
            starts: [
                StagePoint::new(x, bottom_y - 2.0 * spacing),
                StagePoint::new(x, bottom_y - spacing),
                StagePoint::new(x, bottom_y),
            ],
            polygon_rotation_deg: 0.0,
            linear_emphasis: 2.0,
        }
    }

    /// Final resting angles, evenly spaced by 2π/3 around the orbit.
    ///
    /// The anchor lands at the base angle (12 o'clock plus the configured
    /// rotation); the other two continue around in assignment order.
    pub fn final_angles(&self) -> [f64; OBJECT_COUNT] {
        let theta0 = PI / 2.0 + self.polygon_rotation_deg.to_radians();
        [
            theta0 + 2.0 * PI / 3.0,
            theta0 + 4.0 * PI / 3.0,
            theta0,
        ]
    }
}

impl Default for PlanConfig {
    /// The production configuration of the site transition
    fn default() -> Self {
        Self::column(
            OrbitSpec::new(
                StagePoint::new(400.0, 200.0),
                240.0,
                OrbitDirection::Clockwise,
            ),
            160.0,
            690.0,
            190.0,
        )
    }
}
