use ik_kernel::NonZeroPolicy;
use serde::{Deserialize, Serialize};

/// Configuration shared by the incline and two-bone solvers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Epsilon applied to the target position and pole height before they are
    /// used as divisors.
    #[serde(default)]
    pub non_zero: NonZeroPolicy,
}

impl SolverConfig {
    /// Guard divisors with a fixed epsilon instead of the smallest normal double.
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            non_zero: NonZeroPolicy::Fixed(epsilon),
        }
    }
}
