use tracing::debug;

use super::types::{
    Annotation, DigestReport, MetadataReport, ReportSummary, ResultsReport, SummaryKind,
};
use crate::config::values::{lookup_string, merge_lowercase, Values};
use crate::error::{Error, Result};
use crate::format::Format;
use crate::profiles::{ProfileSet, VENDOR_TYPE_CONFIG_NAME, VERSION_CONFIG_NAME};
use crate::report::Report;

pub const ANNOTATIONS_PREFIX_CONFIG_NAME: &str = "annotations.prefix";
pub const DEFAULT_ANNOTATIONS_PREFIX: &str = "charts.openshift.io";

pub const DIGESTS_ANNOTATION_NAME: &str = "digest";
pub const LAST_CERTIFIED_TIMESTAMP_ANNOTATION_NAME: &str = "lastCertifiedTimestamp";
pub const CERTIFIED_OCP_VERSIONS_ANNOTATION_NAME: &str = "certifiedOpenShiftVersions";
pub const TESTED_OCP_VERSION_ANNOTATION_NAME: &str = "testedOpenShiftVersion";
pub const SUPPORTED_OCP_VERSIONS_ANNOTATION_NAME: &str = "supportedOpenShiftVersions";

/// All four projections, computed together.
#[derive(Debug, Clone)]
struct Projections {
    metadata: MetadataReport,
    digests: DigestReport,
    annotations: Vec<Annotation>,
    results: ResultsReport,
}

#[derive(Debug, Clone, Default)]
enum Cache {
    #[default]
    Stale,
    Fresh(Projections),
}

/// Derives metadata, digest, annotation and pass/fail views from a report.
///
/// Projections are computed on the first read after a report or values
/// change and reused until the next change.
#[derive(Debug, Clone, Default)]
pub struct ReportSummarizer<'r> {
    report: Option<&'r Report>,
    values: Values,
    profiles: ProfileSet,
    cache: Cache,
}

impl<'r> ReportSummarizer<'r> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: ProfileSet) -> Self {
        Self {
            profiles,
            ..Self::default()
        }
    }

    pub fn set_report(&mut self, report: &'r Report) -> &mut Self {
        self.report = Some(report);
        self.cache = Cache::Stale;
        self
    }

    /// Merge override values (profile vendor type/version, annotation prefix).
    ///
    /// Keys are lower-cased, so a later value wins whatever its key case.
    pub fn set_values(&mut self, values: Values) -> &mut Self {
        merge_lowercase(&mut self.values, values);
        self.cache = Cache::Stale;
        self
    }

    pub fn is_cached(&self) -> bool {
        matches!(self.cache, Cache::Fresh(_))
    }

    pub fn summary(&mut self, kind: SummaryKind) -> Result<ReportSummary> {
        let projections = self.projections()?;
        let mut summary = ReportSummary::default();
        match kind {
            SummaryKind::Metadata => summary.metadata = Some(projections.metadata),
            SummaryKind::Digests => summary.digests = Some(projections.digests),
            SummaryKind::Results => summary.results = Some(projections.results),
            SummaryKind::Annotations => summary.annotations = Some(projections.annotations),
            SummaryKind::All => {
                summary.metadata = Some(projections.metadata);
                summary.digests = Some(projections.digests);
                summary.results = Some(projections.results);
                summary.annotations = Some(projections.annotations);
            }
        }
        Ok(summary)
    }

    pub fn get_content(&mut self, kind: SummaryKind, format: Format) -> Result<String> {
        let summary = self.summary(kind)?;
        format.encode(&summary, "report summary")
    }

    fn projections(&mut self) -> Result<Projections> {
        let report = self.report.ok_or(Error::NoReport)?;
        let projections = match std::mem::take(&mut self.cache) {
            Cache::Fresh(projections) => projections,
            Cache::Stale => {
                debug!(checks = report.results.len(), "computing report summary");
                Projections {
                    metadata: self.metadata(report),
                    digests: digests(report),
                    annotations: self.annotations(report),
                    results: self.results(report),
                }
            }
        };
        self.cache = Cache::Fresh(projections.clone());
        Ok(projections)
    }

    fn override_value(&self, key: &str) -> Option<String> {
        lookup_string(&self.values, key).filter(|v| !v.is_empty())
    }

    fn profile_vendor_type(&self, report: &Report) -> String {
        self.override_value(VENDOR_TYPE_CONFIG_NAME)
            .unwrap_or_else(|| report.metadata.tool.profile.vendor_type.clone())
    }

    fn profile_version(&self, report: &Report) -> String {
        self.override_value(VERSION_CONFIG_NAME)
            .unwrap_or_else(|| report.metadata.tool.profile.version.clone())
    }

    fn metadata(&self, report: &Report) -> MetadataReport {
        let tool = &report.metadata.tool;
        MetadataReport {
            profile_vendor_type: self.profile_vendor_type(report),
            profile_version: self.profile_version(report),
            chart_uri: tool.chart_uri.clone(),
            chart: report.metadata.chart_data.clone(),
            provider_delivery: tool.provider_delivery,
        }
    }

    fn annotations(&self, report: &Report) -> Vec<Annotation> {
        let prefix = self
            .override_value(ANNOTATIONS_PREFIX_CONFIG_NAME)
            .unwrap_or_else(|| DEFAULT_ANNOTATIONS_PREFIX.to_string());
        let tool = &report.metadata.tool;

        [
            (DIGESTS_ANNOTATION_NAME, &tool.digests.chart),
            (
                LAST_CERTIFIED_TIMESTAMP_ANNOTATION_NAME,
                &tool.last_certified_timestamp,
            ),
            (
                CERTIFIED_OCP_VERSIONS_ANNOTATION_NAME,
                &tool.certified_openshift_versions,
            ),
            (
                TESTED_OCP_VERSION_ANNOTATION_NAME,
                &tool.tested_openshift_version,
            ),
            (
                SUPPORTED_OCP_VERSIONS_ANNOTATION_NAME,
                &tool.supported_openshift_versions,
            ),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(field, value)| Annotation {
            name: format!("{prefix}/{field}"),
            value: value.clone(),
        })
        .collect()
    }

    /// Tally the profile's mandatory checks. A mandatory check missing from
    /// the report counts as failed.
    fn results(&self, report: &Report) -> ResultsReport {
        let vendor_type = self.profile_vendor_type(report);
        let version = self.profile_version(report);
        let profile = self.profiles.resolve(
            Some(vendor_type.as_str()).filter(|v| !v.is_empty()),
            Some(version.as_str()).filter(|v| !v.is_empty()),
        );

        let mut passed = 0;
        let mut failed = 0;
        let mut messages = Vec::new();

        for profile_check in profile.into_iter().flat_map(|p| p.mandatory_checks()) {
            match report.check(&profile_check.name) {
                Some(check) if check.passed() => passed += 1,
                Some(check) => {
                    failed += 1;
                    messages.push(single_line(&check.reason));
                }
                None => {
                    failed += 1;
                    messages.push(format!(
                        "Missing mandatory check : {}",
                        profile_check.name
                    ));
                }
            }
        }

        ResultsReport {
            passed: passed.to_string(),
            failed: failed.to_string(),
            messages,
        }
    }
}

fn digests(report: &Report) -> DigestReport {
    let digests = &report.metadata.tool.digests;
    DigestReport {
        chart_digest: digests.chart.clone(),
        package_digest: digests.package.clone(),
    }
}

/// Drop trailing newlines and join the remaining lines with `", "`.
fn single_line(reason: &str) -> String {
    reason.trim_end_matches('\n').replace('\n', ", ")
}
