//! Timeline solver
//!
//! Finds one shared angular velocity ω and per-object start offsets so that
//! three independently-started objects (a) land on their final angles at the
//! same normalized time and (b) stay 2π/3 apart in angular phase while on
//! the orbit. The two conditions are coupled, so the solver seeds ω from the
//! pairwise spacing equations and refines offsets and ω against each other
//! for a fixed number of passes; this is an approximation, not an exact
//! solve, and is empirically adequate for the production parameter ranges.

use orbit_core::constants::{EPS, EPS_DENOM, MIN_DENOM};
use orbit_core::{angular_difference, signed_arc, tangent_from_point, OrbitDirection};
use std::f64::consts::PI;
use tracing::debug;

use crate::config::{PlanConfig, OBJECT_COUNT};
use crate::plan::{MotionPlan, PlanEntry};

const FULL_TURN: f64 = 2.0 * PI;

/// Equal angular spacing between adjacent final angles
const SPACING: f64 = FULL_TURN / OBJECT_COUNT as f64;

/// Extra-lap rotation thresholds (degrees). A symmetry patch for the
/// production layout: near these rotations the evenly-spaced targets make
/// the wrong object appear to finish first unless it travels one more lap.
/// Tied to the default three-object column; see DESIGN.md.
const LAP_LOW_DEG: f64 = -49.0;
const LAP_HIGH_DEG: f64 = 83.0;

/// Median of the valid pairwise equal-spacing solutions for ω.
///
/// Each object pair (i, j) that keeps its 2π/3 offset throughout the orbit
/// segment yields one linear equation in ω given the start offsets. Pairs
/// with a near-singular stagger are skipped; solutions must be finite and
/// positive. Returns `previous` (if usable) when every pair degenerates.
fn equal_spacing_omega(
    direction: OrbitDirection,
    radius: f64,
    phi: &[f64; OBJECT_COUNT],
    scaled_line: &[f64; OBJECT_COUNT],
    offsets: &[f64; OBJECT_COUNT],
    previous: Option<f64>,
) -> Option<f64> {
    let sgn = direction.signum();
    let mut solutions: Vec<f64> = Vec::with_capacity(3);

    for (i, j) in [(0usize, 1usize), (0, 2), (1, 2)] {
        let stagger = offsets[j] - offsets[i];
        if stagger.abs() < EPS_DENOM {
            continue; // near-singular pair
        }

        let line_bias = (scaled_line[j] - scaled_line[i]) / radius.max(EPS);
        let num = (j - i) as f64 * SPACING - angular_difference(phi[i], phi[j]) - sgn * line_bias;
        let omega = num / (sgn * stagger);

        if omega.is_finite() && omega > EPS {
            solutions.push(omega);
        }
    }

    if solutions.is_empty() {
        return previous.filter(|w| w.is_finite() && *w > EPS);
    }

    solutions.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Some(solutions[solutions.len() / 2])
}

/// Start offsets that make every object finish at absolute time 1 for the
/// given ω: s_i = 1 − (d_i/(Rω) + |Δθ_i|/ω), shifted up so none is negative
/// (an offset is "wait before moving" and cannot run backwards).
fn simultaneous_landing_offsets(
    radius: f64,
    omega: f64,
    scaled_line: &[f64; OBJECT_COUNT],
    arc_abs: &[f64; OBJECT_COUNT],
) -> [f64; OBJECT_COUNT] {
    let w = omega.max(MIN_DENOM);
    let mut raw = [0.0; OBJECT_COUNT];
    for i in 0..OBJECT_COUNT {
        raw[i] = 1.0 - (scaled_line[i] / (radius * w) + arc_abs[i] / w);
    }

    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let shift = if min < 0.0 { -min } else { 0.0 };
    raw.map(|s| s + shift)
}

/// One extra full turn, keeping the sign of the existing delta (orbit
/// direction for an exactly-zero delta).
fn add_lap(delta: f64, direction: OrbitDirection) -> f64 {
    let sign = if delta > 0.0 {
        1.0
    } else if delta < 0.0 {
        -1.0
    } else {
        direction.signum()
    };
    delta + sign * FULL_TURN
}

fn apply_lap_adjustment(
    deltas: &mut [f64; OBJECT_COUNT],
    rotation_deg: f64,
    direction: OrbitDirection,
) {
    let mut order = [0usize, 1, 2];
    order.sort_by(|&i, &j| {
        deltas[i]
            .abs()
            .partial_cmp(&deltas[j].abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if rotation_deg <= LAP_LOW_DEG {
        deltas[order[0]] = add_lap(deltas[order[0]], direction);
    } else if rotation_deg >= LAP_HIGH_DEG {
        deltas[order[0]] = add_lap(deltas[order[0]], direction);
        deltas[order[1]] = add_lap(deltas[order[1]], direction);
    }
}

/// Solve a configuration into a motion plan.
///
/// Pure: identical inputs give identical plans. Degenerate geometry (starts
/// on or inside the circle, near-singular pair equations) resolves through
/// fallbacks rather than errors.
pub fn solve(config: &PlanConfig) -> MotionPlan {
    let orbit = config.orbit;
    let k = config.linear_emphasis;

    let tangents = config.starts.map(|start| tangent_from_point(start, &orbit));

    let mut phi = [0.0; OBJECT_COUNT];
    let mut line = [0.0; OBJECT_COUNT];
    for i in 0..OBJECT_COUNT {
        phi[i] = tangents[i].phi;
        line[i] = tangents[i].line_distance;
    }
    // Emphasis stretches the linear-phase duration in all timing math
    let scaled_line = line.map(|d| d * k);

    let finals = config.final_angles();
    let mut deltas = [0.0; OBJECT_COUNT];
    for i in 0..OBJECT_COUNT {
        deltas[i] = signed_arc(orbit.direction, phi[i], finals[i]);
    }
    apply_lap_adjustment(&mut deltas, config.polygon_rotation_deg, orbit.direction);
    let arc_abs = deltas.map(f64::abs);

    // Seed ω with a neutral stagger; when every pair is singular (the usual
    // case before offsets exist), fall back to the ω that lets the slowest
    // object finish exactly at t = 1 with zero stagger.
    let mut omega = equal_spacing_omega(
        orbit.direction,
        orbit.radius,
        &phi,
        &scaled_line,
        &[0.0; OBJECT_COUNT],
        None,
    )
    .unwrap_or_else(|| {
        let mut need = 0.0f64;
        for i in 0..OBJECT_COUNT {
            need = need.max(scaled_line[i] / orbit.radius + arc_abs[i]);
        }
        need
    });

    // Offsets and ω are mutually dependent; two refinement passes are
    // empirically sufficient for the tested configurations.
    let mut offsets = simultaneous_landing_offsets(orbit.radius, omega, &scaled_line, &arc_abs);
    for _ in 0..2 {
        if let Some(next) = equal_spacing_omega(
            orbit.direction,
            orbit.radius,
            &phi,
            &scaled_line,
            &offsets,
            Some(omega),
        ) {
            omega = next;
        }
        offsets = simultaneous_landing_offsets(orbit.radius, omega, &scaled_line, &arc_abs);
    }

    let velocity = orbit.radius * omega;

    // Absolute phase times, then normalize so the slowest orbit end lands
    // exactly at 1.0
    let mut linear_end_abs = [0.0; OBJECT_COUNT];
    let mut orbit_end_abs = [0.0; OBJECT_COUNT];
    for i in 0..OBJECT_COUNT {
        linear_end_abs[i] = offsets[i] + scaled_line[i] / velocity.max(MIN_DENOM);
        orbit_end_abs[i] = linear_end_abs[i] + arc_abs[i] / omega.max(MIN_DENOM);
    }

    let latest = orbit_end_abs.iter().copied().fold(0.0f64, f64::max);
    let inv = 1.0 / latest.max(MIN_DENOM);

    let entries: [PlanEntry; OBJECT_COUNT] = std::array::from_fn(|i| PlanEntry {
        start: config.starts[i],
        tangent: tangents[i].point,
        tangent_angle: tangents[i].phi,
        angular_delta: deltas[i],
        start_offset: offsets[i] * inv,
        linear_end: linear_end_abs[i] * inv,
        orbit_end: orbit_end_abs[i] * inv,
        final_pos: orbit.point_at(finals[i]),
    });

    debug!(
        omega,
        velocity,
        latest_end = latest,
        "solved motion plan"
    );

    MotionPlan {
        angular_velocity: omega,
        linear_velocity: velocity,
        orbit,
        entries,
    }
}
