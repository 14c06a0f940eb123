//! Tests for the report module.

use test_harness::assertions::assert_verdicts_pass;
use test_harness::{HarnessError, ScenarioSet, ValidationReport};

const PASSING: &str = r#"{
    "scenarios": [
        {
            "kind": "incline",
            "name": "flat_reach",
            "input": { "target": { "x": 7.0, "y": 0.0, "z": 0.0 }, "edge_a": 5.0, "edge_b": 5.0 },
            "expect": { "angle": 0.7953988301841436 }
        },
        {
            "kind": "two_bone",
            "name": "symmetric_reach",
            "input": {
                "target": { "x": 7.0, "y": 0.0, "z": 0.0 },
                "edge_a": 5.0,
                "edge_b": 5.0,
                "pole_vector": { "x": 0.0, "y": 1.0, "z": 0.0 }
            },
            "expect": { "bend_angle": 4.6923876468113, "reaches_target": true }
        }
    ]
}"#;

const FAILING: &str = r#"{
    "scenarios": [
        {
            "kind": "incline",
            "name": "wrong_angle",
            "input": { "target": { "x": 7.0, "y": 0.0, "z": 0.0 }, "edge_a": 5.0, "edge_b": 5.0 },
            "expect": { "angle": 1.0 }
        },
        {
            "kind": "incline",
            "name": "negative_bone",
            "input": { "target": { "x": 1.0, "y": 0.0, "z": 0.0 }, "edge_a": -1.0, "edge_b": 2.0 },
            "expect": { "angle": 1.0 }
        }
    ]
}"#;

fn run(json: &str) -> ValidationReport {
    ScenarioSet::from_json(json).unwrap().run()
}

#[test]
fn empty_report() {
    let text = ValidationReport::new(Vec::new()).to_text();
    assert!(text.contains("Scenarios (0 total, 0 failed)"));
    assert!(text.contains("Oracle Results (0 checks, 0 failed)"));
    assert!(text.contains("Input errors: none"));
}

#[test]
fn passing_report_lists_scenarios_and_checks() {
    let report = run(PASSING);
    let text = report.to_text();
    assert!(text.contains("Scenarios (2 total, 0 failed)"), "{}", text);
    assert!(text.contains("incline \"flat_reach\" ok"), "{}", text);
    assert!(text.contains("two_bone \"symmetric_reach\" ok"), "{}", text);
    assert!(text.contains("[PASS] bend_angle"), "{}", text);
    assert!(text.contains("[PASS] reaches_target"), "{}", text);
    assert!(!text.contains("[FAIL]"), "{}", text);
    assert_eq!(report.check_count(), 6);
    assert!(report.into_result().is_ok());
}

#[test]
fn failing_report_lists_failures() {
    let report = run(FAILING);
    let text = report.to_string();
    assert!(text.contains("Scenarios (2 total, 2 failed)"), "{}", text);
    assert!(text.contains("\"wrong_angle\" FAILED"), "{}", text);
    assert!(text.contains("[FAIL] incline_angle"), "{}", text);
    assert!(text.contains("Oracle Results (2 checks, 2 failed)"), "{}", text);
    assert!(text.contains("wrong_angle/incline_angle"), "{}", text);
}

#[test]
fn failing_report_lists_input_errors() {
    let text = run(FAILING).to_text();
    assert!(text.contains("Input errors (1):"), "{}", text);
    assert!(
        text.contains("negative_bone: edge_a must be non-negative, got -1"),
        "{}",
        text
    );
}

#[test]
fn into_result_returns_first_failure() {
    let err = run(FAILING).into_result().unwrap_err();
    match err {
        HarnessError::OracleFailure { oracle, detail } => {
            assert_eq!(oracle, "wrong_angle/incline_angle");
            assert!(detail.contains("expected 1.000000000"), "{}", detail);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn verdict_assertion_lists_every_failure() {
    let report = run(FAILING);
    let verdicts: Vec<_> = report
        .entries
        .iter()
        .flat_map(|e| e.verdicts.iter().cloned())
        .collect();
    let err = assert_verdicts_pass(&verdicts, "failing set").unwrap_err();
    let text = err.to_string();
    assert!(text.contains("[failing set] 2 of 2 checks failed"), "{}", text);
}
