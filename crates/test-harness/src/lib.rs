//! Reference-scenario harness for the IK solvers.
//!
//! Loads scenarios (solver inputs plus expected outputs) from JSON, solves
//! them, checks the results with tolerance-based oracles, and renders a text
//! report.
//!
//! # Key Components
//!
//! - [`ScenarioSet`]: fixture loading and scenario runs
//! - [`oracle`]: verification functions returning pass/fail verdicts
//! - [`report`]: structured text reports
//! - [`helpers`]: error type and input constructors
//! - [`assertions`]: assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod oracle;
pub mod report;
pub mod scenario;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use report::{ScenarioEntry, ValidationReport};
pub use scenario::{InclineExpectation, Scenario, ScenarioSet, TwoBoneExpectation};
