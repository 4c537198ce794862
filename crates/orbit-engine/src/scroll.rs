//! Scroll gating and plan-time mapping

use orbit_core::ease::inv_lerp;
use serde::{Deserialize, Serialize};

/// How plan time runs relative to gated scroll progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackMode {
    /// Gated progress is plan time
    Forward,
    /// Plan time runs backward as the user scrolls forward: the plan is
    /// authored linear-first but presented orbit-first, unwinding from the
    /// landing pose back to the resting column
    #[default]
    Reversed,
}

impl PlaybackMode {
    pub fn play_time(self, plan_time: f64) -> f64 {
        match self {
            PlaybackMode::Forward => plan_time,
            PlaybackMode::Reversed => 1.0 - plan_time,
        }
    }
}

/// Scroll gate with one-shot activation capture.
///
/// The progress value at which the gate first opens is remembered for the
/// rest of the scroll session, keeping the [gate..1] → [0..1] mapping stable
/// even when the user scrolls back past the threshold. `reset` forgets the
/// capture on session restart (component remount); the capture is per
/// instance, never shared between animation instances.
#[derive(Clone, Debug)]
pub struct ScrollGate {
    threshold: f64,
    activation: Option<f64>,
}

impl ScrollGate {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            activation: None,
        }
    }

    /// Captured activation progress, if the gate has opened this session
    pub fn activation(&self) -> Option<f64> {
        self.activation
    }

    /// Map raw scroll progress to plan time in [0, 1], capturing the
    /// activation point the first time progress reaches the threshold.
    pub fn plan_time(&mut self, progress: f64) -> f64 {
        let progress = progress.clamp(0.0, 1.0);
        if self.activation.is_none() && progress >= self.threshold {
            self.activation = Some(progress);
        }

        match self.activation {
            None => 0.0,
            Some(origin) if progress <= origin => 0.0,
            Some(origin) => inv_lerp(origin, 1.0, progress).clamp(0.0, 1.0),
        }
    }

    /// Forget the captured activation
    pub fn reset(&mut self) {
        self.activation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_boundary_values() {
        let mut gate = ScrollGate::new(0.16);

        // Exactly at the threshold: plan time is exactly 0
        assert_eq!(gate.plan_time(0.16), 0.0);
        // Full scroll: plan time is exactly 1
        assert_eq!(gate.plan_time(1.0), 1.0);
    }

    #[test]
    fn test_gate_holds_before_threshold() {
        let mut gate = ScrollGate::new(0.25);

        assert_eq!(gate.plan_time(0.0), 0.0);
        assert_eq!(gate.plan_time(0.2499), 0.0);
        assert!(gate.activation().is_none());
    }

    #[test]
    fn test_activation_captured_once() {
        let mut gate = ScrollGate::new(0.16);

        // The user jumped straight to 50%: that value becomes the origin
        gate.plan_time(0.5);
        assert_eq!(gate.activation(), Some(0.5));

        // Scrolling back above the threshold does not re-capture
        gate.plan_time(0.3);
        assert_eq!(gate.activation(), Some(0.5));
        assert_eq!(gate.plan_time(0.3), 0.0);

        // The stable mapping resumes from the captured origin
        assert!((gate.plan_time(0.75) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_reset_restores_idle() {
        let mut gate = ScrollGate::new(0.16);
        gate.plan_time(0.9);
        assert!(gate.activation().is_some());

        gate.reset();
        assert!(gate.activation().is_none());
        assert_eq!(gate.plan_time(0.1), 0.0);
    }

    #[test]
    fn test_playback_modes() {
        assert_eq!(PlaybackMode::Forward.play_time(0.25), 0.25);
        assert_eq!(PlaybackMode::Reversed.play_time(0.25), 0.75);
        assert_eq!(PlaybackMode::Reversed.play_time(0.0), 1.0);
    }
}
