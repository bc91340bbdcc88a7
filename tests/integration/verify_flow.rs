//! Integration tests: configure, run and inspect a verifier

use chart_verifier::checks::{catalog, CheckSelection, CheckType};
use chart_verifier::config::{StringKey, Values, ValuesKey};
use chart_verifier::report::Outcome;
use chart_verifier::verifier::{
    CatalogExecutor, CheckResult, ExecutionOptions, LocalBundle, RunState, Verifier,
};
use chart_verifier::{Error, TOOL_VERSION};
use serde_json::json;

use super::helpers::{create_chart, uri, write_file};

/// An executor where every catalog check passes: built-ins plus stand-ins
/// for the checks that need a cluster or helm.
fn passing_executor() -> CatalogExecutor {
    let mut executor = CatalogExecutor::with_builtin_checks();
    for name in catalog::CHECK_NAMES {
        if !executor.is_registered(name) {
            executor.register(
                name,
                |_: &LocalBundle, _: &ExecutionOptions| -> anyhow::Result<CheckResult> {
                    Ok(CheckResult::pass("stubbed"))
                },
            );
        }
    }
    executor
}

#[test]
fn test_full_run_records_every_check_in_catalog_order() {
    let chart = create_chart();
    let mut verifier = Verifier::new();
    let report = verifier.run(&uri(&chart), &passing_executor()).unwrap();

    let names: Vec<String> = report.results.iter().map(|r| r.check.clone()).collect();
    let expected: Vec<String> = catalog::catalog().iter().map(|c| c.to_string()).collect();
    assert_eq!(names, expected);
    assert!(report.results.iter().all(|r| r.outcome == Outcome::Pass));
    assert_eq!(report.metadata.tool.version, TOOL_VERSION);
    assert_eq!(report.metadata.tool.chart_uri, uri(&chart));
    assert_eq!(
        report.metadata.chart_data.as_ref().unwrap().annotations["charts.openshift.io/name"],
        "Demo"
    );
    assert_eq!(verifier.state(), RunState::Completed);
}

#[test]
fn test_builtin_checks_detect_chart_problems() {
    let chart = create_chart();
    write_file(chart.path(), "crds/widget.yaml", "kind: CustomResourceDefinition\n");
    std::fs::remove_file(chart.path().join("README.md")).unwrap();

    let mut verifier = Verifier::new();
    let report = verifier
        .run(&uri(&chart), &CatalogExecutor::with_builtin_checks())
        .unwrap();

    let readme = report.check("v1.0/has-readme").unwrap();
    assert_eq!(readme.outcome, Outcome::Fail);
    assert_eq!(readme.reason, "Chart does not have a README");
    let crds = report.check("v1.0/not-contains-crds").unwrap();
    assert_eq!(crds.outcome, Outcome::Fail);
    assert_eq!(
        report.check("v1.0/images-are-certified").unwrap().outcome,
        Outcome::Unknown
    );
}

#[test]
fn test_selection_limits_checks() {
    let chart = create_chart();
    let selection =
        CheckSelection::from_lists(&["helm-lint", "v1.0/has-readme"], &[] as &[&str]).unwrap();

    let mut verifier = Verifier::new();
    verifier.configure().unwrap().select_checks(&selection);
    let report = verifier.run(&uri(&chart), &passing_executor()).unwrap();

    let names: Vec<&str> = report.results.iter().map(|r| r.check.as_str()).collect();
    assert_eq!(names, vec!["v1.0/has-readme", "v1.0/helm-lint"]);
}

#[test]
fn test_disabling_checks_keeps_the_rest() {
    let chart = create_chart();
    let selection =
        CheckSelection::from_lists(&[] as &[&str], &["chart-testing", "helm-lint"]).unwrap();

    let mut verifier = Verifier::new();
    verifier.configure().unwrap().select_checks(&selection);
    let report = verifier.run(&uri(&chart), &passing_executor()).unwrap();

    assert_eq!(report.results.len(), catalog::CHECK_NAMES.len() - 2);
    assert!(report.check("v1.0/helm-lint").is_none());
    assert!(report.check("v1.0/chart-testing").is_none());
}

#[test]
fn test_profile_and_overrides_are_recorded() {
    let chart = create_chart();
    let set: Values = [("profile.vendortype".to_string(), json!("community"))]
        .into_iter()
        .collect();
    let chart_set: Values = [
        ("replicas".to_string(), json!("3")),
        ("image.tag".to_string(), json!("latest")),
    ]
    .into_iter()
    .collect();

    let mut verifier = Verifier::new();
    verifier
        .configure()
        .unwrap()
        .set_values(ValuesKey::CommandSet, set)
        .set_values(ValuesKey::ChartSet, chart_set)
        .set_string(StringKey::OpenshiftVersion, vec!["4.15".to_string()]);
    let report = verifier.run(&uri(&chart), &passing_executor()).unwrap();

    assert_eq!(report.metadata.tool.profile.vendor_type, "community");
    assert_eq!(report.metadata.tool.profile.version, "v1.0");
    assert_eq!(report.metadata.overrides, "image.tag=latest,replicas=3");
    assert_eq!(report.metadata.tool.tested_openshift_version, "4.15");
    assert_eq!(
        report.check("v1.0/is-helm-v3").unwrap().check_type,
        CheckType::Mandatory
    );
    assert_eq!(
        report.check("v1.0/has-readme").unwrap().check_type,
        CheckType::Optional
    );
}

#[test]
fn test_invalid_configuration_never_reaches_the_chart() {
    let mut verifier = Verifier::new();
    verifier
        .configure()
        .unwrap()
        .set_values("not-a-group", Values::new());

    // The chart path does not exist; validation must fail first.
    let err = verifier
        .run("/nonexistent/chart", &passing_executor())
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid values key name: not-a-group");
    assert_eq!(verifier.state(), RunState::Failed);
    assert!(verifier.report().is_none());
}

#[test]
fn test_missing_chart_is_an_execution_error() {
    let mut verifier = Verifier::new();
    let err = verifier
        .run("/nonexistent/chart", &passing_executor())
        .unwrap_err();
    assert!(matches!(err, Error::Execution(_)));
    assert!(verifier.report().is_none());
}
