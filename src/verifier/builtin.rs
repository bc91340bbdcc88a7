//! Checks answered from chart files alone.

use anyhow::Result;

use super::bundle::LocalBundle;
use super::executor::{CatalogExecutor, CheckResult};
use super::options::ExecutionOptions;
use crate::checks::catalog;

const ARCHIVE_NOT_INSPECTED: &str = "Chart archive contents were not inspected";

pub(super) fn register_all(executor: &mut CatalogExecutor) {
    executor
        .register(catalog::HAS_README, has_readme)
        .register(catalog::IS_HELM_V3, is_helm_v3)
        .register(catalog::CONTAINS_TEST, contains_test)
        .register(catalog::CONTAINS_VALUES, contains_values)
        .register(catalog::CONTAINS_VALUES_SCHEMA, contains_values_schema)
        .register(catalog::HAS_KUBEVERSION, has_kubeversion)
        .register(catalog::NOT_CONTAINS_CRDS, not_contains_crds);
}

fn outcome(passed: bool, pass: &str, fail: &str) -> CheckResult {
    if passed {
        CheckResult::pass(pass)
    } else {
        CheckResult::fail(fail)
    }
}

fn has_readme(bundle: &LocalBundle, _: &ExecutionOptions) -> Result<CheckResult> {
    if bundle.is_archive() {
        return Ok(CheckResult::fail(ARCHIVE_NOT_INSPECTED));
    }
    Ok(outcome(
        bundle.contains("README.md"),
        "Chart has a README",
        "Chart does not have a README",
    ))
}

fn is_helm_v3(bundle: &LocalBundle, _: &ExecutionOptions) -> Result<CheckResult> {
    let Some(chart) = bundle.chart() else {
        return Ok(CheckResult::fail(ARCHIVE_NOT_INSPECTED));
    };
    Ok(outcome(
        chart.api_version == "v2",
        "API version is V2, used in Helm 3",
        "API version is not V2, used in Helm 3",
    ))
}

fn contains_test(bundle: &LocalBundle, _: &ExecutionOptions) -> Result<CheckResult> {
    if bundle.is_archive() {
        return Ok(CheckResult::fail(ARCHIVE_NOT_INSPECTED));
    }
    let tests = bundle.files_under("templates/tests")?;
    Ok(outcome(
        !tests.is_empty(),
        "Chart test files exist",
        "Chart test files do not exist",
    ))
}

fn contains_values(bundle: &LocalBundle, _: &ExecutionOptions) -> Result<CheckResult> {
    if bundle.is_archive() {
        return Ok(CheckResult::fail(ARCHIVE_NOT_INSPECTED));
    }
    Ok(outcome(
        bundle.contains("values.yaml"),
        "Values file exist",
        "Values file does not exist",
    ))
}

fn contains_values_schema(bundle: &LocalBundle, _: &ExecutionOptions) -> Result<CheckResult> {
    if bundle.is_archive() {
        return Ok(CheckResult::fail(ARCHIVE_NOT_INSPECTED));
    }
    Ok(outcome(
        bundle.contains("values.schema.json"),
        "Values schema file exist",
        "Values schema file does not exist",
    ))
}

fn has_kubeversion(bundle: &LocalBundle, _: &ExecutionOptions) -> Result<CheckResult> {
    let Some(chart) = bundle.chart() else {
        return Ok(CheckResult::fail(ARCHIVE_NOT_INSPECTED));
    };
    Ok(outcome(
        !chart.kube_version.trim().is_empty(),
        "Kubernetes version specified",
        "Kubernetes version is not specified",
    ))
}

fn not_contains_crds(bundle: &LocalBundle, _: &ExecutionOptions) -> Result<CheckResult> {
    if bundle.is_archive() {
        return Ok(CheckResult::fail(ARCHIVE_NOT_INSPECTED));
    }
    let crds = bundle.files_under("crds")?;
    Ok(outcome(
        crds.is_empty(),
        "Chart does not contain CRDs",
        "Chart contains CRDs",
    ))
}
