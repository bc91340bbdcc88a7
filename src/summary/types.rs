use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::report::ChartMetadata;

/// Which projection of a report to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    Metadata,
    Digests,
    Results,
    Annotations,
    All,
}

impl SummaryKind {
    pub const ALL: [SummaryKind; 5] = [
        SummaryKind::All,
        SummaryKind::Annotations,
        SummaryKind::Digests,
        SummaryKind::Metadata,
        SummaryKind::Results,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SummaryKind::Metadata => "metadata",
            SummaryKind::Digests => "digests",
            SummaryKind::Results => "results",
            SummaryKind::Annotations => "annotations",
            SummaryKind::All => "all",
        }
    }
}

impl fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SummaryKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::Parse(format!("summary kind '{s}' not recognized")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DigestReport {
    #[serde(rename = "chart")]
    pub chart_digest: String,
    #[serde(rename = "package")]
    pub package_digest: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetadataReport {
    #[serde(rename = "vendorType")]
    pub profile_vendor_type: String,
    #[serde(rename = "profileVersion")]
    pub profile_version: String,
    #[serde(rename = "chart-uri")]
    pub chart_uri: String,
    pub chart: Option<ChartMetadata>,
    #[serde(rename = "providerControlledDelivery")]
    pub provider_delivery: bool,
}

/// Pass/fail tally of a report's mandatory checks.
///
/// Counts are strings to match the established report-info format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultsReport {
    pub passed: String,
    pub failed: String,
    #[serde(rename = "message", default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
}

/// Emitted summary. Only the requested projections are present; a requested
/// annotations projection is written even when it is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(rename = "metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataReport>,
    #[serde(rename = "digests", default, skip_serializing_if = "Option::is_none")]
    pub digests: Option<DigestReport>,
    #[serde(rename = "results", default, skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultsReport>,
    #[serde(rename = "annotations", default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<Annotation>>,
}
