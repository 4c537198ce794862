//! Timeline solving for the scroll-orbit transition
//!
//! Turns a parameter set (orbit circle, three start points, final-triangle
//! rotation, linear-phase emphasis) into an immutable [`MotionPlan`]: one
//! shared angular velocity plus per-object start offsets and phase
//! boundaries such that all three objects merge tangentially onto the orbit
//! and land on their evenly-spaced final angles at normalized time 1.
//!
//! Plans serialize to JSON so the production player can replay them without
//! carrying the solver.

pub mod config;
pub mod plan;
pub mod solver;

pub use config::{PlanConfig, ANCHOR_INDEX, OBJECT_COUNT};
pub use plan::{MotionPlan, PlanEntry, PlanError};
pub use solver::solve;
