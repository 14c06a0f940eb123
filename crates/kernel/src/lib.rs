pub mod edge;
pub mod geometry;
pub mod scalar;
pub mod triangle;

// Re-export the value types and kernel functions at crate root for convenience.
pub use edge::{soften_edge, stretch_edge};
pub use geometry::angle::Angle;
pub use geometry::point::Point2d;
pub use geometry::rotation::{EulerRotation, ParseRotationOrderError, RotationOrder};
pub use geometry::vector::Vec3;
pub use scalar::{NonZeroPolicy, clamp, lerp, non_zero, sign, signed_fit};
pub use triangle::{signed_distance_point_to_line, triangle_angle};

use serde::{Deserialize, Serialize};

/// Tolerances for comparing solver output against expected values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Lengths and positions closer than this are considered equal.
    pub linear: f64,
    /// Angles (radians) closer than this are considered equal.
    pub angular: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            linear: 1e-9,
            angular: 1e-9,
        }
    }
}

impl Tolerance {
    pub fn lengths_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }

    pub fn points_coincident(&self, a: &Vec3, b: &Vec3) -> bool {
        (*a - *b).length() <= self.linear
    }

    /// Compares angles modulo a full turn.
    pub fn angles_equal(&self, a: Angle, b: Angle) -> bool {
        (a - b).wrapped().radians().abs() <= self.angular
    }

    pub fn rotations_equal(&self, a: &EulerRotation, b: &EulerRotation) -> bool {
        a.angle_to(b) <= self.angular
    }
}
