//! Summaries derived from a verification report.

mod summarizer;
mod types;


pub use summarizer::{
    ReportSummarizer, ANNOTATIONS_PREFIX_CONFIG_NAME, CERTIFIED_OCP_VERSIONS_ANNOTATION_NAME,
    DEFAULT_ANNOTATIONS_PREFIX, DIGESTS_ANNOTATION_NAME, LAST_CERTIFIED_TIMESTAMP_ANNOTATION_NAME,
    SUPPORTED_OCP_VERSIONS_ANNOTATION_NAME, TESTED_OCP_VERSION_ANNOTATION_NAME,
};
pub use types::{
    Annotation, DigestReport, MetadataReport, ReportSummary, ResultsReport, SummaryKind,
};
