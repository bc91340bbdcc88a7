//! Test helper functions for E2E tests

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the chart-verifier binary with `args` from `cwd`
pub fn run_cli(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chart-verifier"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run chart-verifier")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Creates a minimal Helm 3 chart directory inside `parent`
pub fn create_chart(parent: &Path) -> String {
    let root = parent.join("demo");
    fs::create_dir_all(root.join("templates")).expect("Failed to create chart directory");
    fs::write(
        root.join("Chart.yaml"),
        "apiVersion: v2\nname: demo\nversion: 0.1.0\n",
    )
    .expect("Failed to write Chart.yaml");
    fs::write(root.join("README.md"), "# demo\n").expect("Failed to write README.md");
    fs::write(root.join("values.yaml"), "replicas: 1\n").expect("Failed to write values.yaml");
    root.to_str().expect("Non UTF-8 temp path").to_string()
}

/// A report with one failing mandatory check, as written by a previous run
pub const SAMPLE_REPORT: &str = r#"apiversion: v1
kind: verify-report
metadata:
  tool:
    verifier-version: 1.0.0
    profile:
      VendorType: partner
      version: v1.0
    chart-uri: charts/demo-0.1.0.tgz
    digests:
      chart: sha256:abc
    testedOpenShiftVersion: "4.14"
    providerControlledDelivery: false
  chart:
    name: demo
    version: 0.1.0
  chart-overrides: ""
results:
  - check: v1.0/images-are-certified
    type: Mandatory
    outcome: FAIL
    reason: |
      bad
      image
"#;

pub fn write_sample_report() -> (TempDir, String) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("report.yaml");
    fs::write(&path, SAMPLE_REPORT).expect("Failed to write report");
    let path = path.to_str().expect("Non UTF-8 temp path").to_string();
    (dir, path)
}
