use serde::{Deserialize, Serialize};

use super::vector::Vec3;

/// A point in 2D space, used for planar projections of 3D positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Project onto the XZ plane: `x` maps to `x`, `z` maps to `y`.
    pub fn from_xz(v: &Vec3) -> Self {
        Self { x: v.x, y: v.z }
    }

    /// Distance from the origin. Does not underflow for subnormal-scale
    /// components.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}
