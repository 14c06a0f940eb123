//! Single-output solver: the incline angle of the upper bone.

use ik_kernel::{Angle, Vec3, clamp, triangle_angle};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::SolverConfig;
use crate::error::{InputError, check_length, check_vector};
use crate::reach::Reach;

/// Inputs to [`solve_incline`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InclineInput {
    /// Target position relative to the chain root.
    pub target: Vec3,
    pub edge_a: f64,
    pub edge_b: f64,
    pub soften: f64,
    pub do_soften: bool,
}

impl Default for InclineInput {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            edge_a: 0.0,
            edge_b: 0.0,
            soften: 0.0,
            do_soften: true,
        }
    }
}

impl InclineInput {
    pub fn validate(&self) -> Result<(), InputError> {
        check_vector("target", self.target)?;
        check_length("edge_a", self.edge_a)?;
        check_length("edge_b", self.edge_b)?;
        check_length("soften", self.soften)
    }
}

/// Solve the incline angle with the default [`SolverConfig`].
pub fn solve_incline(input: &InclineInput) -> Angle {
    solve_incline_with(input, &SolverConfig::default())
}

/// Interior angle at the root between the upper bone and the root-to-target
/// edge, plus the target's elevation (slope clamped to 45 degrees).
pub fn solve_incline_with(input: &InclineInput, config: &SolverConfig) -> Angle {
    let target = input.target.non_zero(config.non_zero);
    let reach = Reach::resolve(
        &target,
        input.edge_a,
        input.edge_b,
        input.soften,
        input.do_soften,
    );

    let interior = triangle_angle(input.edge_a, reach.edge_c, input.edge_b);
    let elevation = clamp(target.y / target.x, -1.0, 1.0).atan();

    trace!(
        reach = reach.dynamic,
        edge_c = reach.edge_c,
        interior,
        elevation,
        "incline solved"
    );
    Angle::from_radians(interior + elevation)
}
