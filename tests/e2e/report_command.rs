//! E2E tests for `chart-verifier report`

use super::helpers::{run_cli, stderr, stdout, write_sample_report};

#[test]
fn test_report_digests_json() {
    let (dir, report) = write_sample_report();
    let output = run_cli(&["report", "digests", &report], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({"digests": {"chart": "sha256:abc", "package": ""}})
    );
}

#[test]
fn test_report_results_yaml() {
    let (dir, report) = write_sample_report();
    let output = run_cli(&["report", "results", &report, "-o", "yaml"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let parsed: serde_yaml::Value = serde_yaml::from_str(&stdout(&output)).unwrap();
    let results = &parsed["results"];
    assert_eq!(results["passed"].as_str(), Some("0"));
    assert_eq!(results["failed"].as_str(), Some("12"));
    let messages: Vec<&str> = results["message"]
        .as_sequence()
        .unwrap()
        .iter()
        .map(|m| m.as_str().unwrap())
        .collect();
    assert_eq!(messages.len(), 12);
    assert_eq!(messages[0], "Missing mandatory check : v1.0/has-readme");
    assert!(messages.contains(&"bad, image"));
}

#[test]
fn test_report_community_profile_override() {
    let (dir, report) = write_sample_report();
    let output = run_cli(
        &["report", "results", &report, "--set", "profile.vendortype=community"],
        dir.path(),
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed["results"]["passed"], "0");
    assert_eq!(parsed["results"]["failed"], "1");
}

#[test]
fn test_report_annotations_with_prefix() {
    let (dir, report) = write_sample_report();
    let output = run_cli(
        &["report", "annotations", &report, "-s", "annotations.prefix=example.com"],
        dir.path(),
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let names: Vec<&str> = parsed["annotations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["example.com/digest", "example.com/testedOpenShiftVersion"]
    );
}

#[test]
fn test_report_write_to_file() {
    let (dir, report) = write_sample_report();
    let output = run_cli(&["report", "metadata", &report, "-w"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());

    let written = std::fs::read_to_string(dir.path().join("report-info.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["metadata"]["vendorType"], "partner");
    assert_eq!(parsed["metadata"]["chart-uri"], "charts/demo-0.1.0.tgz");
}

#[test]
fn test_report_unknown_kind_is_rejected() {
    let (dir, report) = write_sample_report();
    let output = run_cli(&["report", "everything", &report], dir.path());
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_report_missing_file_fails() {
    let (dir, _) = write_sample_report();
    let output = run_cli(&["report", "all", "missing.yaml"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
    assert!(stderr(&output).contains("Failed to read report"));
}
