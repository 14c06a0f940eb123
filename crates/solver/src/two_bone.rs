//! Full two-bone solver: bend angle, chain orientation and stretched lengths.
//!
//! The chain lies along +X of the root joint with the bend about +Z. The
//! orientation is built in two stages: an interior roll about Z that opens the
//! upper bone away from the root-to-target line, followed by an exterior
//! rotation (twist about X, pitch about Z, yaw about Y, applied in that order)
//! that aims the triangle at the target and spins it toward the pole vector.

use std::f64::consts::PI;

use ik_kernel::{
    Angle, EulerRotation, NonZeroPolicy, Point2d, RotationOrder, Vec3, non_zero,
    signed_distance_point_to_line, stretch_edge, triangle_angle,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::SolverConfig;
use crate::error::{InputError, check_length, check_scalar, check_vector};
use crate::reach::Reach;

/// Inputs to [`solve_two_bone`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoBoneInput {
    /// Target position relative to the chain root.
    pub target: Vec3,
    /// Upper bone length.
    pub edge_a: f64,
    /// Lower bone length.
    pub edge_b: f64,
    /// Point the bend plane turns toward, relative to the chain root.
    pub pole_vector: Vec3,
    /// Extra roll about the root-to-target axis, added after the pole twist.
    pub twist: Angle,
    pub soften: f64,
    pub do_soften: bool,
    /// 0 keeps the bone lengths, 1 stretches them to fill an overshooting reach.
    pub stretch_strength: f64,
}

impl Default for TwoBoneInput {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            edge_a: 0.0,
            edge_b: 0.0,
            pole_vector: Vec3::ZERO,
            twist: Angle::ZERO,
            soften: 0.0,
            do_soften: true,
            stretch_strength: 1.0,
        }
    }
}

impl TwoBoneInput {
    pub fn validate(&self) -> Result<(), InputError> {
        check_vector("target", self.target)?;
        check_vector("pole_vector", self.pole_vector)?;
        check_length("edge_a", self.edge_a)?;
        check_length("edge_b", self.edge_b)?;
        check_scalar("twist", self.twist.radians())?;
        check_length("soften", self.soften)?;
        check_scalar("stretch_strength", self.stretch_strength)?;
        if !(0.0..=1.0).contains(&self.stretch_strength) {
            return Err(InputError::StretchOutOfRange {
                value: self.stretch_strength,
            });
        }
        Ok(())
    }
}

/// Output of [`solve_two_bone`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoBoneSolution {
    /// Rotation of the middle joint about its Z axis: the interior angle at the
    /// middle joint plus a half turn.
    pub bend_angle: Angle,
    /// Orientation of the root joint, in X-Y-Z order.
    pub orientation: EulerRotation,
    pub stretched_edge_a: f64,
    pub stretched_edge_b: f64,
}

impl TwoBoneSolution {
    /// Unit direction of the upper bone.
    pub fn upper_direction(&self) -> Vec3 {
        self.orientation.rotate(Vec3::X)
    }

    /// Unit direction of the lower bone.
    pub fn lower_direction(&self) -> Vec3 {
        let (s, c) = self.bend_angle.radians().sin_cos();
        self.orientation.rotate(Vec3::new(c, s, 0.0))
    }

    /// Position of the middle joint relative to the chain root.
    pub fn elbow_position(&self) -> Vec3 {
        self.upper_direction() * self.stretched_edge_a
    }

    /// Position of the chain end relative to the chain root.
    pub fn effector_position(&self) -> Vec3 {
        self.elbow_position() + self.lower_direction() * self.stretched_edge_b
    }
}

/// Solve the two-bone chain with the default [`SolverConfig`].
pub fn solve_two_bone(input: &TwoBoneInput) -> TwoBoneSolution {
    solve_two_bone_with(input, &SolverConfig::default())
}

pub fn solve_two_bone_with(input: &TwoBoneInput, config: &SolverConfig) -> TwoBoneSolution {
    let (edge_a, edge_b) = (input.edge_a, input.edge_b);
    let target = input.target.non_zero(config.non_zero);

    let world_y = world_yaw(&target);
    let twist = pole_twist(&target, &input.pole_vector, world_y, config.non_zero)
        + input.twist.radians();

    let reach = Reach::resolve(&target, edge_a, edge_b, input.soften, input.do_soften);
    let bend_angle = triangle_angle(edge_a, edge_b, reach.edge_c) + PI;

    let interior = EulerRotation::new(
        0.0,
        0.0,
        triangle_angle(edge_a, reach.edge_c, edge_b),
        RotationOrder::Zxy,
    );
    let pitch = (target.y / target.horizontal_length()).atan();
    // Pitch goes on before yaw: yaw turns the plane pitch acts in.
    let exterior = EulerRotation::new(twist, world_y, pitch, RotationOrder::Xzy);
    let orientation = interior.then(&exterior).reorder(RotationOrder::Xyz);

    let strength = input.stretch_strength;
    let stretched_edge_a = stretch_edge(edge_a, reach.dynamic, reach.chain_length, strength);
    let stretched_edge_b = stretch_edge(edge_b, reach.dynamic, reach.chain_length, strength);
    if stretched_edge_a != edge_a || stretched_edge_b != edge_b {
        debug!(
            reach = reach.dynamic,
            chain_length = reach.chain_length,
            strength,
            stretched_edge_a,
            stretched_edge_b,
            "stretch engaged"
        );
    }

    trace!(
        reach = reach.dynamic,
        edge_c = reach.edge_c,
        bend = bend_angle,
        twist,
        world_y,
        pitch,
        "two-bone solved"
    );

    TwoBoneSolution {
        bend_angle: Angle::from_radians(bend_angle),
        orientation,
        stretched_edge_a,
        stretched_edge_b,
    }
}

/// Yaw about +Y that swings +X onto the target's horizontal direction, with
/// the half-turn correction for targets behind the root.
fn world_yaw(target: &Vec3) -> f64 {
    let quadrant = if target.x < 0.0 { PI } else { 0.0 };
    quadrant - (target.z / target.x).atan()
}

/// Roll about the root-to-target axis that turns the bend plane toward `pole`.
///
/// `d` is the pole's offset across the vertical plane holding the target and
/// `h` its height above the target line within that plane; the roll is the
/// angle of `(h, d)` recovered with the same half-turn correction as the yaw.
fn pole_twist(target: &Vec3, pole: &Vec3, world_y: f64, policy: NonZeroPolicy) -> f64 {
    let d = signed_distance_point_to_line(Point2d::from_xz(pole), Point2d::from_xz(target));
    let rotated_z = Vec3::new(0.0, 0.0, -1.0).rotate_about_y(world_y);
    let normal = target.cross(&rotated_z).normal();
    let h = non_zero((*pole - *target).dot(&normal), policy);
    let quadrant = if h < 0.0 { PI } else { 0.0 };
    quadrant + (d / h).atan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn symmetric_arm(target: Vec3) -> TwoBoneInput {
        TwoBoneInput {
            target,
            edge_a: 5.0,
            edge_b: 5.0,
            pole_vector: Vec3::Y,
            twist: Angle::ZERO,
            soften: 0.0,
            do_soften: false,
            stretch_strength: 0.0,
        }
    }

    #[test]
    fn test_world_yaw_quadrants() {
        assert_relative_eq!(world_yaw(&Vec3::new(1.0, 0.0, 1.0)), -PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(world_yaw(&Vec3::new(1.0, 0.0, -1.0)), PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(world_yaw(&Vec3::new(-1.0, 0.0, -1.0)), 0.75 * PI, epsilon = 1e-12);
        assert_relative_eq!(world_yaw(&Vec3::new(-1.0, 0.0, 1.0)), 1.25 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_yaw_aims_x_at_target() {
        for target in [
            Vec3::new(3.0, 0.0, 4.0),
            Vec3::new(-3.0, 0.0, 4.0),
            Vec3::new(-3.0, 0.0, -4.0),
            Vec3::new(3.0, 0.0, -4.0),
        ] {
            let aimed = Vec3::X.rotate_about_y(world_yaw(&target));
            assert_relative_eq!(aimed, target / 5.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_pole_twist_cardinal_poles() {
        let target = Vec3::new(7.0, 0.0, 0.0).non_zero(NonZeroPolicy::SmallestPositive);
        let yaw = world_yaw(&target);
        let p = NonZeroPolicy::SmallestPositive;
        assert_relative_eq!(pole_twist(&target, &Vec3::Y, yaw, p), 0.0, epsilon = 1e-12);
        assert_relative_eq!(pole_twist(&target, &-Vec3::Y, yaw, p), PI, epsilon = 1e-12);
        assert_relative_eq!(
            pole_twist(&target, &Vec3::new(0.0, 2.0, 2.0), yaw, p),
            PI / 4.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_symmetric_scenario() {
        let s = solve_two_bone(&symmetric_arm(Vec3::new(7.0, 0.0, 0.0)));
        // Interior angle at the middle joint of the 5-5-7 triangle, plus a half turn.
        assert_relative_eq!(s.bend_angle.radians(), 0.02f64.acos() + PI, epsilon = 1e-12);
        // Root opens by the angle between the upper bone and the target line.
        assert_relative_eq!(s.orientation.z, 0.7f64.acos(), epsilon = 1e-12);
        assert_relative_eq!(s.orientation.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(s.orientation.y, 0.0, epsilon = 1e-12);
        assert_eq!(s.orientation.order, RotationOrder::Xyz);
        assert_eq!(s.stretched_edge_a, 5.0);
        assert_eq!(s.stretched_edge_b, 5.0);
    }

    #[test]
    fn test_stretch_scenario() {
        let input = TwoBoneInput {
            stretch_strength: 1.0,
            ..symmetric_arm(Vec3::new(12.0, 0.0, 0.0))
        };
        let s = solve_two_bone(&input);
        assert_relative_eq!(s.stretched_edge_a, 6.0, epsilon = 1e-12);
        assert_relative_eq!(s.stretched_edge_b, 6.0, epsilon = 1e-12);
        // Fully extended: no bend at either joint.
        assert_relative_eq!(s.bend_angle.radians(), 2.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(s.effector_position(), input.target, epsilon = 1e-9);
    }

    #[test]
    fn test_reference_pose() {
        let input = TwoBoneInput {
            target: Vec3::new(3.0, 4.0, -2.0),
            edge_a: 4.0,
            edge_b: 3.5,
            pole_vector: Vec3::new(1.0, 2.0, 5.0),
            twist: Angle::from_radians(0.3),
            soften: 0.5,
            do_soften: true,
            stretch_strength: 0.5,
        };
        let s = solve_two_bone(&input);
        let expected = EulerRotation::new(
            1.7919100097223186,
            -0.310408255318678,
            0.7732199922788309,
            RotationOrder::Xyz,
        );
        assert_relative_eq!(s.bend_angle.radians(), 4.739177898716097, epsilon = 1e-9);
        assert!(s.orientation.angle_to(&expected) < 1e-9);
        assert_relative_eq!(
            s.elbow_position(),
            Vec3::new(2.725851998830236, 2.660255813387876, 1.2217896250211069),
            epsilon = 1e-9
        );
        assert_relative_eq!(s.effector_position(), input.target, epsilon = 1e-9);
    }

    #[test]
    fn test_target_behind_root() {
        let input = TwoBoneInput {
            target: Vec3::new(-6.0, 1.5, 3.0),
            edge_a: 4.0,
            edge_b: 3.5,
            pole_vector: Vec3::new(0.0, -3.0, 1.0),
            do_soften: false,
            ..TwoBoneInput::default()
        };
        let s = solve_two_bone(&input);
        assert_relative_eq!(s.bend_angle.radians(), 5.458204996952632, epsilon = 1e-9);
        assert_relative_eq!(s.effector_position(), input.target, epsilon = 1e-9);
        assert_eq!(s.stretched_edge_a, 4.0);
    }

    #[test]
    fn test_target_at_root_is_finite() {
        let s = solve_two_bone(&symmetric_arm(Vec3::ZERO));
        assert!(s.bend_angle.is_finite());
        assert!(s.orientation.is_finite());
        assert!(s.stretched_edge_a.is_finite() && s.stretched_edge_b.is_finite());
        // Bones fold back onto each other.
        assert_relative_eq!(s.bend_angle.radians(), PI, epsilon = 1e-12);
        assert!(s.effector_position().length() < 1e-9);
    }

    #[test]
    fn test_pole_twist_at_root_is_finite() {
        let p = NonZeroPolicy::SmallestPositive;
        let target = Vec3::ZERO.non_zero(p);
        let twist = pole_twist(&target, &Vec3::Y, world_yaw(&target), p);
        assert_relative_eq!(twist, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_validate() {
        assert!(symmetric_arm(Vec3::X).validate().is_ok());
        let bad = TwoBoneInput {
            stretch_strength: 1.5,
            ..symmetric_arm(Vec3::X)
        };
        assert_eq!(
            bad.validate(),
            Err(InputError::StretchOutOfRange { value: 1.5 })
        );
        let bad = TwoBoneInput {
            pole_vector: Vec3::new(f64::INFINITY, 0.0, 0.0),
            ..symmetric_arm(Vec3::X)
        };
        assert!(matches!(
            bad.validate(),
            Err(InputError::NonFiniteVector { field: "pole_vector", .. })
        ));
    }

    #[test]
    fn test_defaults_match_node_defaults() {
        let input = TwoBoneInput::default();
        assert_eq!(input.stretch_strength, 1.0);
        assert!(input.do_soften);
        assert_eq!(input.twist, Angle::ZERO);
    }
}
