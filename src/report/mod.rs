//! Report data model, construction and (de)serialization.

mod chart;
mod types;


pub use chart::{ChartMetadata, Maintainer};
pub use types::{
    CheckReport, Digests, Outcome, ProfileInfo, Report, ReportMetadata, ToolMetadata,
    REPORT_API_VERSION, REPORT_KIND,
};

use crate::checks::{CheckId, CheckType};
use crate::error::{Error, Result};
use crate::format::Format;

impl Report {
    /// An empty report with API version and kind set.
    pub fn new() -> Self {
        Self {
            apiversion: REPORT_API_VERSION.to_string(),
            kind: REPORT_KIND.to_string(),
            ..Default::default()
        }
    }

    /// Append a check with outcome `UNKNOWN`.
    ///
    /// If the identifier is already present the existing entry is returned
    /// (with its type updated) so identifiers stay unique.
    pub fn add_check(&mut self, id: &CheckId, check_type: CheckType) -> &mut CheckReport {
        let check = id.to_string();
        let index = match self.results.iter().position(|r| r.check == check) {
            Some(index) => index,
            None => {
                self.results.push(CheckReport {
                    check,
                    check_type,
                    outcome: Outcome::Unknown,
                    reason: String::new(),
                });
                self.results.len() - 1
            }
        };
        let entry = &mut self.results[index];
        entry.check_type = check_type;
        entry
    }

    pub fn check(&self, check: &str) -> Option<&CheckReport> {
        self.results.iter().find(|r| r.check == check)
    }

    /// Fill fields the execution collaborator left unset.
    pub(crate) fn finalize(&mut self, tool_version: &str, chart_uri: &str) {
        if self.apiversion.is_empty() {
            self.apiversion = REPORT_API_VERSION.to_string();
        }
        if self.kind.is_empty() {
            self.kind = REPORT_KIND.to_string();
        }
        let tool = &mut self.metadata.tool;
        if tool.version.is_empty() {
            tool.version = tool_version.to_string();
        }
        if tool.chart_uri.is_empty() {
            tool.chart_uri = chart_uri.to_string();
        }
    }

    /// Parse a report in either encoding. JSON is tried first.
    pub fn load(content: &str) -> Result<Self> {
        if let Ok(report) = serde_json::from_str::<Report>(content) {
            return Ok(report);
        }
        serde_yaml::from_str::<Report>(content).map_err(|e| Error::Parse(format!("report: {e}")))
    }

    pub fn to_text(&self, format: Format) -> Result<String> {
        format.encode(self, "report")
    }
}
