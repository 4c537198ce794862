use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Stage-space position in CSS pixels (y grows downward)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StagePoint {
    pub x: f64,
    pub y: f64,
}

impl StagePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: StagePoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation toward `other`
    pub fn lerp(self, other: StagePoint, t: f64) -> StagePoint {
        StagePoint {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for StagePoint {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}
