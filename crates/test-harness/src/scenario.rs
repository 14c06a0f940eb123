//! Reference scenarios: solver inputs paired with expected outputs, loaded
//! from JSON fixtures and run through the oracles.

use std::collections::HashSet;
use std::path::Path;

use ik_kernel::{Angle, EulerRotation, Tolerance, Vec3};
use ik_solver::{
    InclineInput, SolverConfig, TwoBoneInput, solve_incline_with, solve_two_bone_with,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::helpers::HarnessError;
use crate::oracle;
use crate::report::{ScenarioEntry, ValidationReport};

/// Expected incline output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InclineExpectation {
    pub angle: Angle,
}

/// Expected two-bone outputs. Every field is optional; only the ones present
/// are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoBoneExpectation {
    pub bend_angle: Option<Angle>,
    pub orientation: Option<EulerRotation>,
    pub stretched_edge_a: Option<f64>,
    pub stretched_edge_b: Option<f64>,
    pub elbow: Option<Vec3>,
    pub effector: Option<Vec3>,
    /// The chain end should land on the target.
    pub reaches_target: bool,
    /// The elbow should sit on the pole's side of the target line.
    pub toward_pole: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scenario {
    Incline {
        name: String,
        input: InclineInput,
        expect: InclineExpectation,
    },
    TwoBone {
        name: String,
        input: TwoBoneInput,
        #[serde(default)]
        expect: TwoBoneExpectation,
    },
}

impl Scenario {
    pub fn name(&self) -> &str {
        match self {
            Self::Incline { name, .. } | Self::TwoBone { name, .. } => name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Incline { .. } => "incline",
            Self::TwoBone { .. } => "two_bone",
        }
    }

    /// Solve the scenario and run every applicable oracle.
    pub fn run(&self, config: &SolverConfig, tol: &Tolerance) -> ScenarioEntry {
        let (summary, validation, verdicts) = match self {
            Self::Incline { input, expect, .. } => {
                let angle = solve_incline_with(input, config);
                let verdicts = vec![oracle::check_angle("incline_angle", angle, expect.angle, tol)];
                (
                    format!("angle={:.9}", angle.radians()),
                    input.validate(),
                    verdicts,
                )
            }
            Self::TwoBone { input, expect, .. } => {
                let solution = solve_two_bone_with(input, config);
                let mut verdicts = oracle::run_invariant_checks(input, &solution, config, tol);

                if let Some(bend) = expect.bend_angle {
                    verdicts.push(oracle::check_angle("bend_angle", solution.bend_angle, bend, tol));
                }
                if let Some(orientation) = &expect.orientation {
                    verdicts.push(oracle::check_orientation(&solution, orientation, tol));
                }
                if let (Some(a), Some(b)) = (expect.stretched_edge_a, expect.stretched_edge_b) {
                    verdicts.push(oracle::check_stretched_edges(&solution, a, b, tol));
                }
                if let Some(elbow) = &expect.elbow {
                    verdicts.push(oracle::check_position(
                        "elbow",
                        &solution.elbow_position(),
                        elbow,
                        tol,
                    ));
                }
                if let Some(effector) = &expect.effector {
                    verdicts.push(oracle::check_position(
                        "effector",
                        &solution.effector_position(),
                        effector,
                        tol,
                    ));
                }
                if expect.reaches_target {
                    verdicts.push(oracle::check_reaches_target(input, &solution, tol));
                }
                if expect.toward_pole {
                    verdicts.push(oracle::check_bends_toward_pole(input, &solution, tol));
                }

                let o = &solution.orientation;
                (
                    format!(
                        "bend={:.9} orientation=({:.6}, {:.6}, {:.6}) {} stretched=({:.6}, {:.6})",
                        solution.bend_angle.radians(),
                        o.x,
                        o.y,
                        o.z,
                        o.order,
                        solution.stretched_edge_a,
                        solution.stretched_edge_b,
                    ),
                    input.validate(),
                    verdicts,
                )
            }
        };

        let input_error = validation.err().map(|e| e.to_string());
        if let Some(err) = &input_error {
            warn!(scenario = self.name(), error = %err, "scenario input rejected by validation");
        }
        debug!(
            scenario = self.name(),
            checks = verdicts.len(),
            passed = oracle::all_passed(&verdicts),
            "scenario solved"
        );

        ScenarioEntry {
            name: self.name().to_string(),
            kind: self.kind().to_string(),
            summary,
            verdicts,
            input_error,
        }
    }
}

/// A fixture file: shared tolerance and solver config plus the scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    #[serde(default)]
    pub tolerance: Tolerance,
    #[serde(default)]
    pub config: SolverConfig,
    pub scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    /// Parse a scenario set, rejecting duplicate names.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        let set: Self = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        for scenario in &set.scenarios {
            if !seen.insert(scenario.name()) {
                return Err(HarnessError::DuplicateName {
                    name: scenario.name().to_string(),
                });
            }
        }
        Ok(set)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn find(&self, name: &str) -> Result<&Scenario, HarnessError> {
        self.scenarios
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| HarnessError::UnknownScenario {
                name: name.to_string(),
            })
    }

    /// Run a single scenario by name.
    pub fn run_one(&self, name: &str) -> Result<ScenarioEntry, HarnessError> {
        Ok(self.find(name)?.run(&self.config, &self.tolerance))
    }

    /// Run every scenario and collect the results into a report.
    #[instrument(skip(self), fields(count = self.scenarios.len()))]
    pub fn run(&self) -> ValidationReport {
        let entries: Vec<ScenarioEntry> = self
            .scenarios
            .iter()
            .map(|s| s.run(&self.config, &self.tolerance))
            .collect();

        let report = ValidationReport::new(entries);
        info!(
            scenarios = report.entries.len(),
            checks = report.check_count(),
            failed = report.failed_checks().count(),
            "scenario set complete"
        );
        report
    }
}

/// The first failed verdict of `entry`, as an error.
pub fn expect_pass(entry: &ScenarioEntry) -> Result<(), HarnessError> {
    match entry.verdicts.iter().find(|v| !v.passed) {
        None => Ok(()),
        Some(v) => Err(HarnessError::OracleFailure {
            oracle: format!("{}/{}", entry.name, v.oracle_name),
            detail: v.detail.clone(),
        }),
    }
}
