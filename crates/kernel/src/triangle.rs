//! Law-of-cosines solve and planar distance used to place the IK triangle.

use crate::geometry::point::Point2d;
use crate::scalar::{clamp, sign, sqr};

/// Interior angle opposite side `c` of the triangle with sides `a`, `b`, `c`.
///
/// Side lengths that cannot form a triangle saturate to `0` or `pi` instead of
/// producing NaN from `acos`.
pub fn triangle_angle(a: f64, b: f64, c: f64) -> f64 {
    let cosine = (sqr(a) + sqr(b) - sqr(c)) / (2.0 * a * b);
    clamp(cosine, -1.0, 1.0).acos()
}

/// Signed perpendicular distance from `point` to the line through the origin
/// and `line_point`.
///
/// Positive when `point` lies counter-clockwise of the line direction. The
/// result is undefined when `line_point` is the origin; callers coerce it away
/// from zero first.
pub fn signed_distance_point_to_line(point: Point2d, line_point: Point2d) -> f64 {
    let diff = line_point.y * point.x - line_point.x * point.y;
    diff.abs() / line_point.length() * -sign(diff)
}
