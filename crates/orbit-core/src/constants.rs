/// Geometric coincidence tolerance (stage pixels / radians)
pub const EPS: f64 = 1e-6;

/// Near-singular guard for the pairwise spacing denominators
pub const EPS_DENOM: f64 = 1e-5;

/// Minimum denominator for progress remapping
pub const MIN_DENOM: f64 = 1e-9;

/// Minimum normalized duration of a motion phase
pub const MIN_PHASE_SPAN: f64 = 1e-6;
