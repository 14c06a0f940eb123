//! Structured text reports of a scenario run.
//!
//! Reports are plain text rather than JSON so a failing run can be read
//! straight from test output.

use std::fmt;

use crate::helpers::HarnessError;
use crate::oracle::OracleVerdict;

/// The outcome of one scenario.
#[derive(Debug, Clone)]
pub struct ScenarioEntry {
    pub name: String,
    pub kind: String,
    /// One-line description of the solver output.
    pub summary: String,
    pub verdicts: Vec<OracleVerdict>,
    /// Set when the input fails validation. The scenario is still solved.
    pub input_error: Option<String>,
}

impl ScenarioEntry {
    pub fn passed(&self) -> bool {
        self.verdicts.iter().all(|v| v.passed)
    }
}

/// A complete validation report over a scenario set.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub entries: Vec<ScenarioEntry>,
}

impl ValidationReport {
    pub fn new(entries: Vec<ScenarioEntry>) -> Self {
        Self { entries }
    }

    pub fn passed(&self) -> bool {
        self.entries.iter().all(ScenarioEntry::passed)
    }

    pub fn check_count(&self) -> usize {
        self.entries.iter().map(|e| e.verdicts.len()).sum()
    }

    /// Every failed verdict, paired with its scenario name.
    pub fn failed_checks(&self) -> impl Iterator<Item = (&str, &OracleVerdict)> {
        self.entries.iter().flat_map(|e| {
            e.verdicts
                .iter()
                .filter(|v| !v.passed)
                .map(move |v| (e.name.as_str(), v))
        })
    }

    /// `Ok` when every check passed, otherwise the first failure.
    pub fn into_result(self) -> Result<(), HarnessError> {
        match self.failed_checks().next() {
            None => Ok(()),
            Some((scenario, v)) => Err(HarnessError::OracleFailure {
                oracle: format!("{}/{}", scenario, v.oracle_name),
                detail: v.detail.clone(),
            }),
        }
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== IK Validation Report ===\n\n");

        let failed_scenarios = self.entries.iter().filter(|e| !e.passed()).count();
        out.push_str(&format!(
            "Scenarios ({} total, {} failed):\n",
            self.entries.len(),
            failed_scenarios,
        ));

        for (idx, entry) in self.entries.iter().enumerate() {
            let status = if entry.passed() { "ok" } else { "FAILED" };
            out.push_str(&format!(
                "  [{}] {} \"{}\" {}\n",
                idx, entry.kind, entry.name, status,
            ));
            out.push_str(&format!("      {}\n", entry.summary));
            for v in &entry.verdicts {
                let status = if v.passed { "PASS" } else { "FAIL" };
                out.push_str(&format!("      [{}] {}: {}\n", status, v.oracle_name, v.detail));
            }
        }

        let failed: Vec<_> = self.failed_checks().collect();
        out.push_str(&format!(
            "\nOracle Results ({} checks, {} failed)\n",
            self.check_count(),
            failed.len(),
        ));
        for (scenario, v) in &failed {
            out.push_str(&format!("  {}/{}: {}\n", scenario, v.oracle_name, v.detail));
        }

        let input_errors: Vec<_> = self
            .entries
            .iter()
            .filter_map(|e| e.input_error.as_ref().map(|err| (&e.name, err)))
            .collect();
        if input_errors.is_empty() {
            out.push_str("\nInput errors: none\n");
        } else {
            out.push_str(&format!("\nInput errors ({}):\n", input_errors.len()));
            for (name, err) in input_errors {
                out.push_str(&format!("  {}: {}\n", name, err));
            }
        }

        out
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
