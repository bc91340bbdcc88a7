//! `report`: summarize an existing report.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::common::{collect_values, write_output};
use crate::format::Format;
use crate::report::Report;
use crate::summary::{ReportSummarizer, SummaryKind};

/// File name stem used with `--write-to-file`.
pub const REPORT_INFO_STEM: &str = "report-info";

#[derive(Debug, Clone)]
pub struct ReportArgs {
    pub kind: SummaryKind,
    pub report_path: PathBuf,
    pub set: Vec<String>,
    pub set_values: Vec<PathBuf>,
    pub output: Format,
    pub write_to_file: bool,
}

pub fn report_info_path(base: &Path, format: Format) -> PathBuf {
    base.join(format!("{REPORT_INFO_STEM}.{}", format.extension()))
}

/// Load the report and render the requested summary.
pub fn summarize(args: &ReportArgs) -> Result<String> {
    let content = fs::read_to_string(&args.report_path)
        .with_context(|| format!("Failed to read report {}", args.report_path.display()))?;
    let report = Report::load(&content)?;
    let values = collect_values(&args.set, &args.set_values)?;

    let mut summarizer = ReportSummarizer::new();
    summarizer.set_report(&report).set_values(values);
    Ok(summarizer.get_content(args.kind, args.output)?)
}

pub fn execute(args: ReportArgs) -> Result<()> {
    let content = summarize(&args)?;

    if args.write_to_file {
        let path = report_info_path(Path::new("."), args.output);
        write_output(&content, Some(&path))?;
        info!(path = %path.display(), kind = %args.kind, "summary written");
        eprintln!("{} {} summary written to {}", "✓".green(), args.kind, path.display());
    } else {
        write_output(&content, None)?;
    }
    Ok(())
}
