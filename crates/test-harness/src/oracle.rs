//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics.
//! This lets a scenario run collect every failure in one pass.

use ik_kernel::{Angle, EulerRotation, Tolerance, Vec3};
use ik_solver::{SolverConfig, TwoBoneInput, TwoBoneSolution, solve_two_bone_with};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }
}

/// True when every verdict passed.
pub fn all_passed(verdicts: &[OracleVerdict]) -> bool {
    verdicts.iter().all(|v| v.passed)
}

fn fmt_vec(v: &Vec3) -> String {
    format!("({:.6}, {:.6}, {:.6})", v.x, v.y, v.z)
}

fn fmt_rotation(r: &EulerRotation) -> String {
    format!("({:.6}, {:.6}, {:.6}) {}", r.x, r.y, r.z, r.order)
}

// ── Reference Oracles ───────────────────────────────────────────────────────

/// Compare two angles modulo a full turn.
pub fn check_angle(name: &str, actual: Angle, expected: Angle, tol: &Tolerance) -> OracleVerdict {
    let error = (actual - expected).wrapped().radians().abs();
    let detail = format!(
        "expected {:.9}, got {:.9} (error {:.3e})",
        expected.radians(),
        actual.radians(),
        error
    );
    if tol.angles_equal(actual, expected) {
        OracleVerdict::pass_val(name, detail, error)
    } else {
        OracleVerdict::fail_val(name, detail, error)
    }
}

/// Check the root orientation against a reference rotation, by the angle of
/// the rotation between them rather than per-component.
pub fn check_orientation(
    solution: &TwoBoneSolution,
    expected: &EulerRotation,
    tol: &Tolerance,
) -> OracleVerdict {
    let error = solution.orientation.angle_to(expected);
    let detail = format!(
        "expected {}, got {} (off by {:.3e} rad)",
        fmt_rotation(expected),
        fmt_rotation(&solution.orientation),
        error
    );
    if tol.rotations_equal(&solution.orientation, expected) {
        OracleVerdict::pass_val("orientation", detail, error)
    } else {
        OracleVerdict::fail_val("orientation", detail, error)
    }
}

/// Check both stretched bone lengths.
pub fn check_stretched_edges(
    solution: &TwoBoneSolution,
    expected_a: f64,
    expected_b: f64,
    tol: &Tolerance,
) -> OracleVerdict {
    let detail = format!(
        "expected a={:.9} b={:.9}, got a={:.9} b={:.9}",
        expected_a, expected_b, solution.stretched_edge_a, solution.stretched_edge_b
    );
    if tol.lengths_equal(solution.stretched_edge_a, expected_a)
        && tol.lengths_equal(solution.stretched_edge_b, expected_b)
    {
        OracleVerdict::pass("stretched_edges", detail)
    } else {
        OracleVerdict::fail("stretched_edges", detail)
    }
}

/// Compare a solved joint position with a reference point.
pub fn check_position(name: &str, actual: &Vec3, expected: &Vec3, tol: &Tolerance) -> OracleVerdict {
    let error = (*actual - *expected).length();
    let detail = format!(
        "expected {}, got {} (distance {:.3e})",
        fmt_vec(expected),
        fmt_vec(actual),
        error
    );
    if tol.points_coincident(actual, expected) {
        OracleVerdict::pass_val(name, detail, error)
    } else {
        OracleVerdict::fail_val(name, detail, error)
    }
}

// ── Geometric Oracles ───────────────────────────────────────────────────────

/// Check that the chain end lands on the target.
pub fn check_reaches_target(
    input: &TwoBoneInput,
    solution: &TwoBoneSolution,
    tol: &Tolerance,
) -> OracleVerdict {
    check_position(
        "reaches_target",
        &solution.effector_position(),
        &input.target,
        tol,
    )
}

/// Check that the forward-evaluated bones keep their stretched lengths.
pub fn check_chain_lengths(solution: &TwoBoneSolution, tol: &Tolerance) -> OracleVerdict {
    let elbow = solution.elbow_position();
    let upper = elbow.length();
    let lower = (solution.effector_position() - elbow).length();
    let detail = format!(
        "upper {:.9} (want {:.9}), lower {:.9} (want {:.9})",
        upper, solution.stretched_edge_a, lower, solution.stretched_edge_b
    );
    if tol.lengths_equal(upper, solution.stretched_edge_a)
        && tol.lengths_equal(lower, solution.stretched_edge_b)
    {
        OracleVerdict::pass("chain_lengths", detail)
    } else {
        OracleVerdict::fail("chain_lengths", detail)
    }
}

/// Check that the elbow sits on the pole's side of the root-to-target line.
///
/// Passes without comparing when the pole or the elbow lies on that line.
pub fn check_bends_toward_pole(
    input: &TwoBoneInput,
    solution: &TwoBoneSolution,
    tol: &Tolerance,
) -> OracleVerdict {
    let Some(axis) = input.target.normalized() else {
        return OracleVerdict::pass("toward_pole", "target at root, no bend plane".to_string());
    };
    let off_axis = |p: Vec3| p - axis * p.dot(&axis);
    let pole_offset = off_axis(input.pole_vector);
    let elbow_offset = off_axis(solution.elbow_position());

    if pole_offset.length() <= tol.linear || elbow_offset.length() <= tol.linear {
        return OracleVerdict::pass(
            "toward_pole",
            "pole or elbow on the target line, nothing to compare".to_string(),
        );
    }

    let alignment = pole_offset.dot(&elbow_offset) / (pole_offset.length() * elbow_offset.length());
    let detail = format!("cosine between elbow and pole offsets: {:.6}", alignment);
    if alignment >= 0.0 {
        OracleVerdict::pass_val("toward_pole", detail, alignment)
    } else {
        OracleVerdict::fail_val("toward_pole", detail, alignment)
    }
}

/// Check that every output component is finite.
pub fn check_finite(solution: &TwoBoneSolution) -> OracleVerdict {
    let finite = solution.bend_angle.is_finite()
        && solution.orientation.is_finite()
        && solution.stretched_edge_a.is_finite()
        && solution.stretched_edge_b.is_finite();
    if finite {
        OracleVerdict::pass("finite", "all outputs finite".to_string())
    } else {
        OracleVerdict::fail("finite", format!("non-finite output: {:?}", solution))
    }
}

/// Solve again and check the result is bit-identical.
pub fn check_deterministic(
    input: &TwoBoneInput,
    solution: &TwoBoneSolution,
    config: &SolverConfig,
) -> OracleVerdict {
    let again = solve_two_bone_with(input, config);
    if again == *solution {
        OracleVerdict::pass("deterministic", "repeat solve is identical".to_string())
    } else {
        OracleVerdict::fail(
            "deterministic",
            format!("first {:?}, then {:?}", solution, again),
        )
    }
}

/// Checks that apply to every two-bone solution, whatever the reference data.
pub fn run_invariant_checks(
    input: &TwoBoneInput,
    solution: &TwoBoneSolution,
    config: &SolverConfig,
    tol: &Tolerance,
) -> Vec<OracleVerdict> {
    vec![
        check_finite(solution),
        check_chain_lengths(solution, tol),
        check_deterministic(input, solution, config),
    ]
}
