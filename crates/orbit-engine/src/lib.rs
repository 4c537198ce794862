//! Scroll-driven playback of a solved motion plan
//!
//! Platform-agnostic: the host delivers a scroll progress value once per
//! scroll/animation frame and positions its own elements from the returned
//! [`Frame`]. Compiles to both native (CLI tooling) and WASM (web host).
//!
//! Aside from the one-shot gate-activation capture, playback is stateless:
//! every frame is a pure function of the plan and the latest progress value,
//! forward or in reverse.

pub mod camera;
pub mod engine;
pub mod sampler;
pub mod scroll;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export core types
pub use camera::CameraRig;
pub use engine::{EngineConfig, Frame, ObjectFrame, OrbitEngine};
pub use sampler::{phase_at, sample_entry, MotionPhase};
pub use scroll::{PlaybackMode, ScrollGate};
