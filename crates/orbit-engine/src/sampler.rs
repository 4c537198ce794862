//! Pure phase-selecting position sampler

use orbit_core::constants::MIN_PHASE_SPAN;
use orbit_core::ease::quintic_blend;
use orbit_core::{OrbitSpec, StagePoint};
use orbit_plan::PlanEntry;

/// Phase of one object's motion at a given normalized time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPhase {
    /// Pre-motion hold at the start point
    Waiting,
    /// Eased straight-line approach to the tangent point
    Approaching,
    /// Constant-rate sweep along the orbit
    Orbiting,
    /// Resting at the final point
    Arrived,
}

pub fn phase_at(entry: &PlanEntry, t: f64) -> MotionPhase {
    if t < entry.start_offset {
        MotionPhase::Waiting
    } else if t < entry.linear_end {
        MotionPhase::Approaching
    } else if t < entry.orbit_end {
        MotionPhase::Orbiting
    } else {
        MotionPhase::Arrived
    }
}

/// Object position at normalized time `t`.
///
/// Pure: identical inputs always give identical output, so the host can
/// call it every frame with a freshly derived `t`, forward or in reverse.
/// `emphasis` is the linear-phase easing factor k and must match the
/// solve-time value for loaded plans.
pub fn sample_entry(entry: &PlanEntry, orbit: &OrbitSpec, t: f64, emphasis: f64) -> StagePoint {
    match phase_at(entry, t) {
        MotionPhase::Waiting => entry.start,
        MotionPhase::Approaching => {
            let span = (entry.linear_end - entry.start_offset).max(MIN_PHASE_SPAN);
            let u = (t - entry.start_offset) / span;
            entry.start.lerp(entry.tangent, quintic_blend(u, emphasis))
        }
        MotionPhase::Orbiting => {
            // Angular velocity is constant within the phase by construction;
            // no extra easing here
            let span = (entry.orbit_end - entry.linear_end).max(MIN_PHASE_SPAN);
            let u = (t - entry.linear_end) / span;
            orbit.point_at(entry.tangent_angle + entry.angular_delta * u)
        }
        MotionPhase::Arrived => entry.final_pos,
    }
}
