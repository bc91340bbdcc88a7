//! Shared test helpers for verification flow tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Test helper: Create a Helm 3 chart that passes every file-based check
pub fn create_chart() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();

    fs::write(
        root.join("Chart.yaml"),
        "apiVersion: v2\n\
         name: demo\n\
         version: 1.2.3\n\
         kubeVersion: '>=1.20.0'\n\
         annotations:\n  charts.openshift.io/name: Demo\n",
    )
    .expect("Failed to write Chart.yaml");
    fs::write(root.join("README.md"), "# demo\n").expect("Failed to write README.md");
    fs::write(root.join("values.yaml"), "replicas: 1\n").expect("Failed to write values.yaml");
    fs::write(root.join("values.schema.json"), "{}\n")
        .expect("Failed to write values.schema.json");
    write_file(root, "templates/deployment.yaml", "kind: Deployment\n");
    write_file(root, "templates/tests/test-connection.yaml", "kind: Pod\n");

    temp_dir
}

/// Test helper: Write a file, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write file");
}

pub fn uri(dir: &TempDir) -> String {
    dir.path().to_str().expect("Non UTF-8 temp path").to_string()
}
