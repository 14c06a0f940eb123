//! Helper functions: error type and input constructors.

use ik_kernel::{Angle, Vec3};
use ik_solver::{InclineInput, TwoBoneInput};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("failed to read scenario file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenarios: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("scenario not found: {name}")]
    UnknownScenario { name: String },

    #[error("duplicate scenario name: {name}")]
    DuplicateName { name: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },
}

// ── Input Constructors ──────────────────────────────────────────────────────

/// Incline input with softening switched off.
pub fn incline_input(target: Vec3, edge_a: f64, edge_b: f64) -> InclineInput {
    InclineInput {
        target,
        edge_a,
        edge_b,
        soften: 0.0,
        do_soften: false,
    }
}

/// Two-bone input with no twist, softening or stretch.
pub fn rigid_chain(target: Vec3, edge_a: f64, edge_b: f64, pole_vector: Vec3) -> TwoBoneInput {
    TwoBoneInput {
        target,
        edge_a,
        edge_b,
        pole_vector,
        twist: Angle::ZERO,
        soften: 0.0,
        do_soften: false,
        stretch_strength: 0.0,
    }
}

/// Point at `distance` from the origin, `heading` radians around +Y from +X
/// toward +Z, `elevation` radians above the XZ plane.
pub fn point_at(distance: f64, heading: f64, elevation: f64) -> Vec3 {
    let (se, ce) = elevation.sin_cos();
    let (sh, ch) = heading.sin_cos();
    Vec3::new(distance * ce * ch, distance * se, distance * ce * sh)
}
