use crate::point::StagePoint;
use serde::{Deserialize, Serialize};

/// Travel direction around the orbit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitDirection {
    CounterClockwise,
    Clockwise,
}

impl OrbitDirection {
    /// +1 for counter-clockwise, −1 for clockwise
    pub fn signum(self) -> f64 {
        match self {
            OrbitDirection::CounterClockwise => 1.0,
            OrbitDirection::Clockwise => -1.0,
        }
    }
}

/// Shared circular orbit. Immutable per animation run; radius > 0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitSpec {
    pub center: StagePoint,
    pub radius: f64,
    pub direction: OrbitDirection,
}

impl OrbitSpec {
    pub fn new(center: StagePoint, radius: f64, direction: OrbitDirection) -> Self {
        Self {
            center,
            radius,
            direction,
        }
    }

    /// Stage point at orbit parameter `theta`.
    ///
    /// Increasing theta runs counter-clockwise in math convention; the
    /// stage y-axis is screen-down, so the sine term is negated.
    pub fn point_at(&self, theta: f64) -> StagePoint {
        StagePoint::new(
            self.center.x + self.radius * theta.cos(),
            self.center.y - self.radius * theta.sin(),
        )
    }

    /// Orbit parameter of the radial projection of `p` onto the circle
    pub fn radial_angle(&self, p: StagePoint) -> f64 {
        (self.center.y - p.y).atan2(p.x - self.center.x)
    }
}
