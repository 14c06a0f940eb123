//! Euler rotations with an explicit axis order.
//!
//! Angles are stored per axis (`x`, `y`, `z`, in radians) independently of the
//! order in which they are applied. Composition and re-ordering go through a
//! rotation matrix, so an orientation can be rebuilt in any order without
//! changing the rotation it describes.

use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use super::vector::Vec3;
use crate::scalar::clamp;

/// Beyond this `|sin(middle angle)|` the decomposition treats the rotation as
/// gimbal locked and folds the last angle into the first.
const GIMBAL_LIMIT: f64 = 1.0 - 1e-12;

/// The order in which the three axis rotations are applied.
///
/// `Xzy` means X is applied first, then Z, then Y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationOrder {
    #[default]
    Xyz,
    Yzx,
    Zxy,
    Xzy,
    Yxz,
    Zyx,
}

impl RotationOrder {
    pub const ALL: [Self; 6] = [
        Self::Xyz,
        Self::Yzx,
        Self::Zxy,
        Self::Xzy,
        Self::Yxz,
        Self::Zyx,
    ];

    /// Axis indices (0 = X, 1 = Y, 2 = Z) in application order.
    pub fn axes(self) -> [usize; 3] {
        match self {
            Self::Xyz => [0, 1, 2],
            Self::Yzx => [1, 2, 0],
            Self::Zxy => [2, 0, 1],
            Self::Xzy => [0, 2, 1],
            Self::Yxz => [1, 0, 2],
            Self::Zyx => [2, 1, 0],
        }
    }

    /// +1 for cyclic orders, -1 for the others.
    fn parity(self) -> f64 {
        match self {
            Self::Xyz | Self::Yzx | Self::Zxy => 1.0,
            Self::Xzy | Self::Yxz | Self::Zyx => -1.0,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Xyz => "xyz",
            Self::Yzx => "yzx",
            Self::Zxy => "zxy",
            Self::Xzy => "xzy",
            Self::Yxz => "yxz",
            Self::Zyx => "zyx",
        }
    }
}

impl fmt::Display for RotationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rotation order: {0:?}")]
pub struct ParseRotationOrderError(pub String);

impl FromStr for RotationOrder {
    type Err = ParseRotationOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == lowered)
            .ok_or_else(|| ParseRotationOrderError(s.to_string()))
    }
}

/// Three axis rotations (radians) applied in `order`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerRotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub order: RotationOrder,
}

impl EulerRotation {
    pub fn new(x: f64, y: f64, z: f64, order: RotationOrder) -> Self {
        Self { x, y, z, order }
    }

    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, RotationOrder::Xyz)
    }

    fn component(&self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// The rotation matrix, acting on column vectors.
    pub fn to_rotation(&self) -> Rotation3<f64> {
        let [i, j, k] = self.order.axes();
        axis_rotation(k, self.component(k))
            * axis_rotation(j, self.component(j))
            * axis_rotation(i, self.component(i))
    }

    /// Decompose `rotation` into angles applied in `order`.
    ///
    /// The middle angle lands in `[-pi/2, pi/2]`, the outer two in `[-pi, pi]`.
    pub fn from_rotation(rotation: &Rotation3<f64>, order: RotationOrder) -> Self {
        let m = rotation.matrix();
        let [i, j, k] = order.axes();
        let s = order.parity();

        let sin_middle = clamp(-s * m[(k, i)], -1.0, 1.0);
        let (first, middle, last) = if sin_middle.abs() < GIMBAL_LIMIT {
            (
                (s * m[(k, j)]).atan2(m[(k, k)]),
                sin_middle.asin(),
                (s * m[(j, i)]).atan2(m[(i, i)]),
            )
        } else {
            trace!(%order, sin_middle, "euler decomposition at gimbal lock");
            (
                (-s * m[(j, k)]).atan2(m[(j, j)]),
                FRAC_PI_2.copysign(sin_middle),
                0.0,
            )
        };

        let mut angles = [0.0; 3];
        angles[i] = first;
        angles[j] = middle;
        angles[k] = last;
        Self::new(angles[0], angles[1], angles[2], order)
    }

    /// This rotation followed by `other`, expressed in this rotation's order.
    pub fn then(&self, other: &Self) -> Self {
        let composite = other.to_rotation() * self.to_rotation();
        Self::from_rotation(&composite, self.order)
    }

    /// The same rotation expressed in another axis order.
    pub fn reorder(&self, order: RotationOrder) -> Self {
        if order == self.order {
            *self
        } else {
            Self::from_rotation(&self.to_rotation(), order)
        }
    }

    pub fn rotate(&self, v: Vec3) -> Vec3 {
        (self.to_rotation() * Vector3::from(v)).into()
    }

    /// Angle of the relative rotation between `self` and `other`, in `[0, pi]`.
    pub fn angle_to(&self, other: &Self) -> f64 {
        angle_between(&self.to_rotation(), &other.to_rotation())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Default for EulerRotation {
    fn default() -> Self {
        Self::identity()
    }
}

/// Angle of the rotation taking `a` onto `b`, in `[0, pi]`.
///
/// Uses `atan2(2 sin, 2 cos)` from the relative matrix rather than the trace
/// alone, which stays accurate near the identity.
pub fn angle_between(a: &Rotation3<f64>, b: &Rotation3<f64>) -> f64 {
    let relative = a.inverse() * b;
    let m = relative.matrix();
    let two_sin = Vector3::new(
        m[(2, 1)] - m[(1, 2)],
        m[(0, 2)] - m[(2, 0)],
        m[(1, 0)] - m[(0, 1)],
    )
    .norm();
    let two_cos = m.trace() - 1.0;
    two_sin.atan2(two_cos)
}

fn axis_rotation(axis: usize, angle: f64) -> Rotation3<f64> {
    let unit = match axis {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        _ => Vector3::z_axis(),
    };
    Rotation3::from_axis_angle(&unit, angle)
}
