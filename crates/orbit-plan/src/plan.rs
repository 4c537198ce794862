//! Immutable motion plan and its serialized (baked) form

use crate::config::OBJECT_COUNT;
use orbit_core::{OrbitSpec, StagePoint};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors surfaced when loading or checking a serialized plan
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("failed to read plan file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse plan JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("plan invariant violated: {0}")]
    Invariant(String),
}

/// One object's solved timeline. All times are normalized to [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub start: StagePoint,
    /// Tangent point where the approach leg meets the circle
    pub tangent: StagePoint,
    /// Orbit parameter at the tangent point
    pub tangent_angle: f64,
    /// Signed angular travel, including any extra full laps
    pub angular_delta: f64,
    /// Normalized time before which the object holds at `start`
    pub start_offset: f64,
    /// Normalized time at which the linear approach completes
    pub linear_end: f64,
    /// Normalized time at which the object reaches its final angle
    pub orbit_end: f64,
    pub final_pos: StagePoint,
}

/// Solved timeline for the three objects.
///
/// Read-only during playback. Serializable so the production player can
/// replay it without re-running the solver; playback from a loaded plan is
/// bit-for-bit equal to playback from a fresh solve of the same inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionPlan {
    /// Shared angular velocity (radians per normalized time unit)
    pub angular_velocity: f64,
    /// Shared linear speed at the handoff (stage px per normalized time unit)
    pub linear_velocity: f64,
    pub orbit: OrbitSpec,
    pub entries: [PlanEntry; OBJECT_COUNT],
}

impl MotionPlan {
    /// Parse and check a baked plan
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        let plan: MotionPlan = serde_json::from_str(json)?;
        plan.check()?;
        Ok(plan)
    }

    pub fn to_json(&self) -> Result<String, PlanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, PlanError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), PlanError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Check the phase-boundary invariants:
    /// 0 ≤ s ≤ t1 ≤ t2 ≤ 1 per entry, the latest orbit end at exactly 1,
    /// and a positive orbit radius.
    pub fn check(&self) -> Result<(), PlanError> {
        if !(self.orbit.radius > 0.0) {
            return Err(PlanError::Invariant(format!(
                "orbit radius must be positive, got {}",
                self.orbit.radius
            )));
        }

        let tol = 1e-6;
        let mut latest: f64 = 0.0;
        for (i, e) in self.entries.iter().enumerate() {
            let ordered = -tol <= e.start_offset
                && e.start_offset <= e.linear_end + tol
                && e.linear_end <= e.orbit_end + tol
                && e.orbit_end <= 1.0 + tol;
            if !ordered {
                return Err(PlanError::Invariant(format!(
                    "entry {}: phase times out of order (s={}, t1={}, t2={})",
                    i, e.start_offset, e.linear_end, e.orbit_end
                )));
            }
            latest = latest.max(e.orbit_end);
        }

        if (latest - 1.0).abs() > tol {
            return Err(PlanError::Invariant(format!(
                "latest orbit end must land at 1.0, got {}",
                latest
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlanConfig;
    use crate::solver::solve;

    #[test]
    fn test_json_round_trip_is_exact() {
        let plan = solve(&PlanConfig::default());
        let json = plan.to_json().unwrap();
        let loaded = MotionPlan::from_json(&json).unwrap();

        // serde_json preserves f64 exactly; the loaded plan is the plan
        assert_eq!(plan, loaded);
    }

    #[test]
    fn test_check_rejects_disordered_phases() {
        let mut plan = solve(&PlanConfig::default());
        plan.entries[1].linear_end = plan.entries[1].orbit_end + 0.1;

        assert!(matches!(plan.check(), Err(PlanError::Invariant(_))));
    }

    #[test]
    fn test_check_rejects_short_timeline() {
        let mut plan = solve(&PlanConfig::default());
        for e in plan.entries.iter_mut() {
            e.orbit_end *= 0.5;
        }

        assert!(matches!(plan.check(), Err(PlanError::Invariant(_))));
    }

    #[test]
    fn test_check_rejects_zero_radius() {
        let mut plan = solve(&PlanConfig::default());
        plan.orbit.radius = 0.0;

        assert!(matches!(plan.check(), Err(PlanError::Invariant(_))));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            MotionPlan::from_json("not a plan"),
            Err(PlanError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = MotionPlan::load(Path::new("/nonexistent/plan.json")).unwrap_err();
        assert!(matches!(err, PlanError::Io(_)));
    }
}
