//! E2E tests for `chart-verifier verify`

use tempfile::TempDir;

use super::helpers::{create_chart, run_cli, stderr, stdout};

#[test]
fn test_verify_prints_json_report() {
    let dir = TempDir::new().unwrap();
    let chart = create_chart(dir.path());
    let output = run_cli(&["verify", &chart, "-o", "json"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["kind"], "verify-report");
    assert_eq!(report["metadata"]["tool"]["chart-uri"], chart.as_str());
    assert_eq!(report["metadata"]["chart"]["name"], "demo");
    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 12);
    assert_eq!(results[0]["check"], "v1.0/has-readme");
    assert_eq!(results[0]["outcome"], "PASS");
}

#[test]
fn test_verify_enable_limits_checks() {
    let dir = TempDir::new().unwrap();
    let chart = create_chart(dir.path());
    let output = run_cli(
        &["verify", &chart, "-e", "is-helm-v3,has-kubeversion", "-o", "json"],
        dir.path(),
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["outcome"], "PASS");
    assert_eq!(results[1]["check"], "v1.0/has-kubeversion");
    assert_eq!(results[1]["outcome"], "FAIL");
}

#[test]
fn test_verify_enable_and_disable_conflict() {
    let dir = TempDir::new().unwrap();
    let chart = create_chart(dir.path());
    let output = run_cli(
        &["verify", &chart, "-e", "has-readme", "-x", "helm-lint"],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("--enable and --disable can't be used at the same time"));
}

#[test]
fn test_verify_write_to_file() {
    let dir = TempDir::new().unwrap();
    let chart = create_chart(dir.path());
    let output = run_cli(&["verify", &chart, "-w", "--timeout", "5m"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let written = std::fs::read_to_string(dir.path().join("chartverifier/report.yaml")).unwrap();
    assert!(written.contains("kind: verify-report"));
}

#[test]
fn test_verify_then_summarize() {
    let dir = TempDir::new().unwrap();
    let chart = create_chart(dir.path());
    let output = run_cli(
        &["verify", &chart, "-w", "-s", "profile.vendortype=community"],
        dir.path(),
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let output = run_cli(
        &["report", "results", "chartverifier/report.yaml"],
        dir.path(),
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let summary: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(summary["results"]["passed"], "1");
    assert_eq!(summary["results"]["failed"], "0");
}

#[test]
fn test_verify_rejects_bad_timeout() {
    let dir = TempDir::new().unwrap();
    let chart = create_chart(dir.path());
    let output = run_cli(&["verify", &chart, "--timeout", "soon"], dir.path());
    assert!(!output.status.success());
}
