use serde::{Deserialize, Serialize};
use std::fmt;

use super::chart::ChartMetadata;
use crate::checks::CheckType;

pub const REPORT_API_VERSION: &str = "v1";
pub const REPORT_KIND: &str = "verify-report";

/// Full structured output of one verification run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub apiversion: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: ReportMetadata,
    /// Per-check outcomes in execution order.
    #[serde(default)]
    pub results: Vec<CheckReport>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    #[serde(rename = "tool", default)]
    pub tool: ToolMetadata,
    #[serde(rename = "chart", default)]
    pub chart_data: Option<ChartMetadata>,
    #[serde(rename = "chart-overrides", default)]
    pub overrides: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolMetadata {
    #[serde(rename = "verifier-version", default)]
    pub version: String,
    #[serde(default)]
    pub profile: ProfileInfo,
    #[serde(rename = "chart-uri", default)]
    pub chart_uri: String,
    #[serde(default)]
    pub digests: Digests,
    #[serde(
        rename = "lastCertifiedTimestamp",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub last_certified_timestamp: String,
    #[serde(
        rename = "certifiedOpenShiftVersions",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub certified_openshift_versions: String,
    #[serde(
        rename = "testedOpenShiftVersion",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub tested_openshift_version: String,
    #[serde(
        rename = "supportedOpenShiftVersions",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub supported_openshift_versions: String,
    #[serde(rename = "providerControlledDelivery", default)]
    pub provider_delivery: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Digests {
    #[serde(default)]
    pub chart: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub package: String,
}

/// Profile recorded at verification time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileInfo {
    #[serde(rename = "vendorType", alias = "VendorType", default)]
    pub vendor_type: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    #[serde(rename = "UNKNOWN", alias = "Unknown")]
    Unknown,
    #[serde(rename = "PASS", alias = "Pass")]
    Pass,
    #[serde(rename = "FAIL", alias = "Fail")]
    Fail,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Unknown => write!(f, "UNKNOWN"),
            Outcome::Pass => write!(f, "PASS"),
            Outcome::Fail => write!(f, "FAIL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// `<version>/<name>`
    pub check: String,
    #[serde(rename = "type", default)]
    pub check_type: CheckType,
    #[serde(default)]
    pub outcome: Outcome,
    #[serde(default)]
    pub reason: String,
}

impl CheckReport {
    pub fn set_result(&mut self, passed: bool, reason: impl Into<String>) {
        self.outcome = if passed { Outcome::Pass } else { Outcome::Fail };
        self.reason = reason.into();
    }

    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Pass
    }
}
