//! Core geometry for the scroll-orbit transition
//!
//! Pure math only: stage-space points, the shared orbit circle, angle
//! wrapping, easing curves, and the tangent construction that merges a
//! straight approach path onto the circle. No state, no I/O.

pub mod angle;
pub mod constants;
pub mod ease;
pub mod orbit;
pub mod point;
pub mod tangent;

#[cfg(test)]
mod tests;

// Re-export core types
pub use angle::{angular_difference, normalize_angle, signed_arc};
pub use orbit::{OrbitDirection, OrbitSpec};
pub use point::StagePoint;
pub use tangent::{tangent_from_point, TangentSolution};
