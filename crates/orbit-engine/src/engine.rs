//! Frame assembly: scroll progress → gate → play time → positions → camera

use crate::camera::{label_opacity, title_opacity, CameraRig};
use crate::sampler::{phase_at, sample_entry, MotionPhase};
use crate::scroll::{PlaybackMode, ScrollGate};
use orbit_core::StagePoint;
use orbit_plan::{solve, MotionPlan, PlanConfig, PlanError, ANCHOR_INDEX, OBJECT_COUNT};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Playback configuration for one animation instance
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Scroll progress at which the animation begins
    pub gate_threshold: f64,
    pub camera: CameraRig,
    pub mode: PlaybackMode,
    /// Linear-phase easing emphasis; must match the solve-time factor for
    /// loaded plans so playback reproduces the captured feel
    pub linear_emphasis: f64,
}

impl Default for EngineConfig {
    /// Production playback values
    fn default() -> Self {
        Self {
            gate_threshold: 0.16,
            camera: CameraRig::default(),
            mode: PlaybackMode::Reversed,
            linear_emphasis: 2.0,
        }
    }
}

/// One object's slice of a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectFrame {
    pub position: StagePoint,
    pub label_opacity: f64,
    pub phase: MotionPhase,
}

/// Everything the host needs to lay out one scroll frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Forward plan time after gating, in [0, 1]
    pub plan_time: f64,
    /// Plan time as played (reversed in the production presentation)
    pub play_time: f64,
    pub objects: [ObjectFrame; OBJECT_COUNT],
    /// Vertical offset to apply to the stage element
    pub stage_offset_y: f64,
    pub title_opacity: f64,
}

/// Scroll-driven playback engine.
///
/// Owns the solved plan (if any), the one-shot gate capture, and the camera
/// rig; everything else is recomputed from scratch per scroll event. With no
/// plan loaded the engine stays in an idle pose and never fails — the host
/// keeps its static layout until a valid plan arrives.
pub struct OrbitEngine {
    config: EngineConfig,
    gate: ScrollGate,
    plan: Option<MotionPlan>,
}

impl OrbitEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            gate: ScrollGate::new(config.gate_threshold),
            config,
            plan: None,
        }
    }

    /// Interactive variant: re-solve whenever a control changes. The scroll
    /// session (gate capture) is kept.
    pub fn retune(&mut self, params: &PlanConfig) {
        self.plan = Some(solve(params));
        self.config.linear_emphasis = params.linear_emphasis;
    }

    /// Baked variant: adopt a plan serialized earlier. A malformed payload
    /// leaves the current state untouched.
    pub fn load_plan_json(&mut self, json: &str) -> Result<(), PlanError> {
        let plan = MotionPlan::from_json(json)?;
        debug!(
            angular_velocity = plan.angular_velocity,
            "loaded baked motion plan"
        );
        self.plan = Some(plan);
        Ok(())
    }

    pub fn set_plan(&mut self, plan: MotionPlan) {
        self.plan = Some(plan);
    }

    pub fn plan(&self) -> Option<&MotionPlan> {
        self.plan.as_ref()
    }

    /// Restart the scroll session (component remount)
    pub fn reset(&mut self) {
        self.gate.reset();
    }

    /// Compute the frame for the latest scroll progress
    pub fn advance(&mut self, scroll_progress: f64) -> Frame {
        let plan_time = self.gate.plan_time(scroll_progress);
        let play_time = self.config.mode.play_time(plan_time);

        let Some(plan) = &self.plan else {
            return Frame::idle(plan_time, play_time);
        };

        let emphasis = self.config.linear_emphasis;
        let objects: [ObjectFrame; OBJECT_COUNT] = std::array::from_fn(|i| {
            let entry = &plan.entries[i];
            ObjectFrame {
                position: sample_entry(entry, &plan.orbit, play_time, emphasis),
                label_opacity: label_opacity(entry, play_time),
                phase: phase_at(entry, play_time),
            }
        });

        let at_gate = self.config.camera.gate_offset(plan.orbit.center.y);

        // Gate still closed: hold the pre-aligned view with everything faded
        // out; objects rest in their gate pose
        if plan_time <= 0.0 {
            let objects = objects.map(|o| ObjectFrame {
                label_opacity: 0.0,
                ..o
            });
            return Frame {
                plan_time,
                play_time,
                objects,
                stage_offset_y: at_gate,
                title_opacity: 0.0,
            };
        }

        let tracked = &plan.entries[ANCHOR_INDEX];
        Frame {
            plan_time,
            play_time,
            objects,
            stage_offset_y: self
                .config
                .camera
                .stage_offset(plan, tracked, play_time, emphasis),
            title_opacity: title_opacity(plan_time),
        }
    }
}

impl Frame {
    /// Frame produced while no plan is loaded
    fn idle(plan_time: f64, play_time: f64) -> Self {
        let object = ObjectFrame {
            position: StagePoint::new(0.0, 0.0),
            label_opacity: 0.0,
            phase: MotionPhase::Waiting,
        };
        Frame {
            plan_time,
            play_time,
            objects: [object; OBJECT_COUNT],
            stage_offset_y: 0.0,
            title_opacity: 0.0,
        }
    }
}
