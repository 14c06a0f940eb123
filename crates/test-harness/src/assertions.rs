//! Assertion helpers with diagnostic output.
//!
//! Failures carry expected and actual values plus a caller-supplied context
//! string, and come back as `HarnessError` so tests can use `?`.

use ik_kernel::{Angle, EulerRotation, Tolerance, Vec3};

use crate::helpers::HarnessError;
use crate::oracle::OracleVerdict;

/// Assert two angles match modulo a full turn.
pub fn assert_angle_eq(
    actual: Angle,
    expected: Angle,
    tol: &Tolerance,
    ctx: &str,
) -> Result<(), HarnessError> {
    if tol.angles_equal(actual, expected) {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] angle: expected {:.9}, got {:.9} (tol={})",
                ctx,
                expected.radians(),
                actual.radians(),
                tol.angular,
            ),
        })
    }
}

/// Assert two points coincide within the linear tolerance.
pub fn assert_point_eq(
    actual: &Vec3,
    expected: &Vec3,
    tol: &Tolerance,
    ctx: &str,
) -> Result<(), HarnessError> {
    if tol.points_coincident(actual, expected) {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] point: expected {:?}, got {:?} (distance {:.3e}, tol={})",
                ctx,
                expected.to_array(),
                actual.to_array(),
                (*actual - *expected).length(),
                tol.linear,
            ),
        })
    }
}

/// Assert two Euler rotations describe the same rotation, whatever their
/// orders.
pub fn assert_rotation_eq(
    actual: &EulerRotation,
    expected: &EulerRotation,
    tol: &Tolerance,
    ctx: &str,
) -> Result<(), HarnessError> {
    if tol.rotations_equal(actual, expected) {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] rotation: expected {:?} {}, got {:?} {} (off by {:.3e} rad)",
                ctx,
                expected.to_array(),
                expected.order,
                actual.to_array(),
                actual.order,
                actual.angle_to(expected),
            ),
        })
    }
}

/// Assert every verdict passed, listing all failures if not.
pub fn assert_verdicts_pass(verdicts: &[OracleVerdict], ctx: &str) -> Result<(), HarnessError> {
    let failures: Vec<String> = verdicts
        .iter()
        .filter(|v| !v.passed)
        .map(|v| format!("  {}: {}", v.oracle_name, v.detail))
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] {} of {} checks failed:\n{}",
                ctx,
                failures.len(),
                verdicts.len(),
                failures.join("\n"),
            ),
        })
    }
}
