//! Integration tests: summarize reports produced by a verifier run

use chart_verifier::checks::catalog;
use chart_verifier::config::Values;
use chart_verifier::format::Format;
use chart_verifier::report::Report;
use chart_verifier::summary::{ReportSummarizer, ReportSummary, SummaryKind};
use chart_verifier::verifier::{CatalogExecutor, Verifier};
use serde_json::json;

use super::helpers::{create_chart, uri};

fn run_builtin(vendor_type: Option<&str>) -> Report {
    let chart = create_chart();
    let mut verifier = Verifier::new();
    if let Some(vendor_type) = vendor_type {
        let set: Values = [("profile.vendortype".to_string(), json!(vendor_type))]
            .into_iter()
            .collect();
        verifier
            .configure()
            .unwrap()
            .set_values(chart_verifier::config::ValuesKey::CommandSet, set);
    }
    verifier
        .run(&uri(&chart), &CatalogExecutor::with_builtin_checks())
        .unwrap();
    verifier.into_report().unwrap()
}

#[test]
fn test_partner_tally_counts_unimplemented_checks_as_failed() {
    let report = run_builtin(None);
    let mut summarizer = ReportSummarizer::new();
    summarizer.set_report(&report);

    let results = summarizer.summary(SummaryKind::Results).unwrap().results.unwrap();
    let passed: usize = results.passed.parse().unwrap();
    let failed: usize = results.failed.parse().unwrap();
    assert_eq!(passed, 7);
    assert_eq!(passed + failed, catalog::CHECK_NAMES.len());
    assert_eq!(results.messages.len(), failed);
}

#[test]
fn test_community_profile_passes_with_builtin_checks() {
    let report = run_builtin(Some("community"));
    let mut summarizer = ReportSummarizer::new();
    summarizer.set_report(&report);

    let results = summarizer.summary(SummaryKind::Results).unwrap().results.unwrap();
    assert_eq!(results.passed, "1");
    assert_eq!(results.failed, "0");
    assert!(results.messages.is_empty());
}

#[test]
fn test_summary_survives_report_round_trip() {
    let report = run_builtin(None);
    for format in [Format::Json, Format::Yaml] {
        let text = report.to_text(format).unwrap();
        let loaded = Report::load(&text).unwrap();
        assert_eq!(loaded, report);

        let mut original = ReportSummarizer::new();
        original.set_report(&report);
        let mut reloaded = ReportSummarizer::new();
        reloaded.set_report(&loaded);
        assert_eq!(
            original.get_content(SummaryKind::All, Format::Json).unwrap(),
            reloaded.get_content(SummaryKind::All, Format::Json).unwrap()
        );
    }
}

#[test]
fn test_all_summary_parses_back() {
    let report = run_builtin(None);
    let mut summarizer = ReportSummarizer::new();
    summarizer.set_report(&report);

    for format in [Format::Json, Format::Yaml] {
        let text = summarizer.get_content(SummaryKind::All, format).unwrap();
        let summary: ReportSummary = match format {
            Format::Json => serde_json::from_str(&text).unwrap(),
            Format::Yaml => serde_yaml::from_str(&text).unwrap(),
        };
        let metadata = summary.metadata.unwrap();
        assert_eq!(metadata.profile_vendor_type, "partner");
        assert_eq!(metadata.chart.unwrap().name, "demo");
        assert_eq!(summary.digests.unwrap().chart_digest, report.metadata.tool.digests.chart);
        let names: Vec<String> = summary
            .annotations
            .unwrap()
            .iter()
            .map(|a| a.name.clone())
            .collect();
        assert!(names.contains(&"charts.openshift.io/digest".to_string()));
        assert!(names.contains(&"charts.openshift.io/lastCertifiedTimestamp".to_string()));
    }
}

#[test]
fn test_values_override_report_profile() {
    let report = run_builtin(None);
    let mut summarizer = ReportSummarizer::new();
    summarizer.set_report(&report);
    let before = summarizer.summary(SummaryKind::Results).unwrap().results.unwrap();
    assert_ne!(before.failed, "0");

    let override_values: Values = [("profile.vendorType".to_string(), json!("community"))]
        .into_iter()
        .collect();
    summarizer.set_values(override_values);
    let after = summarizer.summary(SummaryKind::All).unwrap();
    assert_eq!(after.metadata.unwrap().profile_vendor_type, "community");
    assert_eq!(after.results.unwrap().failed, "0");
}
