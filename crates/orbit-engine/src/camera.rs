//! Stage camera: pre-alignment, snap-free pickup, pinned follow
//!
//! The camera is a vertical offset applied to the whole stage. Before the
//! gate opens it parks the orbit center at a configured screen y. While the
//! tracked object is still on orbit it blends toward the alignment that will
//! pin the object at `freeze_start_y` the instant its orbit phase hands off
//! to the linear leg, so the pickup produces no visible jump. Through the
//! linear leg the pin target itself drifts toward `freeze_end_y`, and once
//! the object rests at its column position the camera freezes there.

use crate::sampler::sample_entry;
use orbit_core::ease::{ease_out_quart, inv_lerp_signed, lerp, smoothstep};
use orbit_plan::{MotionPlan, PlanEntry};
use serde::{Deserialize, Serialize};

/// Vertical camera targets, in stage pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    /// Screen y of the orbit center while the gate is closed
    pub center_at_gate_y: f64,
    /// Pin target for the tracked object when its linear leg begins
    pub freeze_start_y: f64,
    /// Pin target when the tracked object comes to rest
    pub freeze_end_y: f64,
    /// How much of the pickup alignment is applied while still on orbit
    /// (0 = hold the gate alignment until pickup, 1 = full pre-follow blend)
    pub rise_factor: f64,
}

impl Default for CameraRig {
    /// Production playback values
    fn default() -> Self {
        Self {
            center_at_gate_y: 550.0,
            freeze_start_y: 550.0,
            freeze_end_y: 750.0,
            rise_factor: 0.0,
        }
    }
}

impl CameraRig {
    /// Offset that parks the orbit center at its gate alignment
    pub fn gate_offset(&self, orbit_center_y: f64) -> f64 {
        self.center_at_gate_y - orbit_center_y
    }

    /// Stage offset for the tracked entry at reverse play time `t_play`
    pub fn stage_offset(
        &self,
        plan: &MotionPlan,
        tracked: &PlanEntry,
        t_play: f64,
        emphasis: f64,
    ) -> f64 {
        let at_gate = self.gate_offset(plan.orbit.center.y);

        if t_play >= tracked.linear_end {
            // Still on orbit: blend from the gate alignment toward the
            // alignment that pins the object at freeze_start_y the moment
            // its orbit phase ends
            let handoff = sample_entry(tracked, &plan.orbit, tracked.linear_end, emphasis);
            let align_at_handoff = self.freeze_start_y - handoff.y;

            let u = inv_lerp_signed(tracked.orbit_end, tracked.linear_end, t_play).clamp(0.0, 1.0);
            let pre_follow = lerp(at_gate, align_at_handoff, smoothstep(u));
            lerp(at_gate, pre_follow, self.rise_factor)
        } else if t_play > tracked.start_offset {
            // Pinned linear window: the pin target drifts start → end while
            // the camera follows the object
            let u = inv_lerp_signed(tracked.linear_end, tracked.start_offset, t_play).clamp(0.0, 1.0);
            let pin_y = lerp(self.freeze_start_y, self.freeze_end_y, u);
            pin_y - sample_entry(tracked, &plan.orbit, t_play, emphasis).y
        } else {
            // Landed: freeze at the final alignment
            self.freeze_end_y - tracked.start.y
        }
    }
}

/// Title fade over the final 15% of forward plan time
pub fn title_opacity(plan_time: f64) -> f64 {
    ease_out_quart(((plan_time - 0.85) / 0.15).clamp(0.0, 1.0))
}

/// Per-object label fade over the reverse linear leg: hidden while on orbit,
/// fully visible once the object rests at its column position.
pub fn label_opacity(entry: &PlanEntry, t_play: f64) -> f64 {
    if t_play >= entry.linear_end {
        0.0
    } else if t_play > entry.start_offset {
        let u = inv_lerp_signed(entry.linear_end, entry.start_offset, t_play).clamp(0.0, 1.0);
        smoothstep(u)
    } else {
        1.0
    }
}
