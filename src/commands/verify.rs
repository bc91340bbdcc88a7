//! `verify`: run the checks against a chart and emit the report.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use super::common::{collect_values, write_output};
use crate::checks::CheckSelection;
use crate::config::values::parse_set_args;
use crate::config::{BooleanKey, DurationKey, StringKey, ValuesKey};
use crate::format::Format;
use crate::report::Report;
use crate::verifier::{CatalogExecutor, Verifier, DEFAULT_TIMEOUT};

/// Directory the report is written to with `--write-to-file`.
pub const REPORT_DIR: &str = "chartverifier";

/// Settings for one `verify` invocation.
#[derive(Debug, Clone)]
pub struct VerifyArgs {
    pub chart_uri: String,
    pub enable: Vec<String>,
    pub disable: Vec<String>,
    pub chart_set: Vec<String>,
    pub chart_set_file: Vec<String>,
    pub chart_set_string: Vec<String>,
    pub chart_values: Vec<String>,
    pub set: Vec<String>,
    pub set_values: Vec<PathBuf>,
    pub openshift_version: Option<String>,
    pub timeout: Duration,
    pub provider_delivery: bool,
    pub suppress_error_log: bool,
    pub output: Format,
    pub write_to_file: bool,
    pub kube_apiserver: Option<String>,
    pub kube_as_user: Option<String>,
    pub kube_as_group: Vec<String>,
    pub kube_ca_file: Option<String>,
    pub kube_context: Option<String>,
    pub kube_token: Option<String>,
    pub kubeconfig: Option<String>,
    pub namespace: Option<String>,
    pub registry_config: Option<String>,
    pub repository_config: Option<String>,
    pub repository_cache: Option<String>,
}

impl VerifyArgs {
    pub fn new(chart_uri: impl Into<String>) -> Self {
        Self {
            chart_uri: chart_uri.into(),
            enable: Vec::new(),
            disable: Vec::new(),
            chart_set: Vec::new(),
            chart_set_file: Vec::new(),
            chart_set_string: Vec::new(),
            chart_values: Vec::new(),
            set: Vec::new(),
            set_values: Vec::new(),
            openshift_version: None,
            timeout: DEFAULT_TIMEOUT,
            provider_delivery: false,
            suppress_error_log: false,
            output: Format::Yaml,
            write_to_file: false,
            kube_apiserver: None,
            kube_as_user: None,
            kube_as_group: Vec::new(),
            kube_ca_file: None,
            kube_context: None,
            kube_token: None,
            kubeconfig: None,
            namespace: None,
            registry_config: None,
            repository_config: None,
            repository_cache: None,
        }
    }
}

/// Translate command-line settings into a configured verifier.
pub fn build_verifier(args: &VerifyArgs) -> Result<Verifier> {
    let selection = CheckSelection::from_lists(&args.enable, &args.disable)?;
    let chart_set = parse_set_args(&args.chart_set)?;
    let chart_set_file = parse_set_args(&args.chart_set_file)?;
    let chart_set_string = parse_set_args(&args.chart_set_string)?;
    let command_set = collect_values(&args.set, &args.set_values)?;

    let mut verifier = Verifier::new();
    let config = verifier.configure()?;
    config
        .select_checks(&selection)
        .set_boolean(BooleanKey::ProviderDelivery, args.provider_delivery)
        .set_boolean(BooleanKey::SuppressErrorLog, args.suppress_error_log)
        .set_duration(DurationKey::Timeout, args.timeout)
        .set_values(ValuesKey::ChartSet, chart_set)
        .set_values(ValuesKey::ChartSetFile, chart_set_file)
        .set_values(ValuesKey::ChartSetString, chart_set_string)
        .set_values(ValuesKey::CommandSet, command_set);

    let single = [
        (StringKey::OpenshiftVersion, &args.openshift_version),
        (StringKey::KubeApiServer, &args.kube_apiserver),
        (StringKey::KubeAsUser, &args.kube_as_user),
        (StringKey::KubeCaFile, &args.kube_ca_file),
        (StringKey::KubeContext, &args.kube_context),
        (StringKey::KubeToken, &args.kube_token),
        (StringKey::KubeConfig, &args.kubeconfig),
        (StringKey::Namespace, &args.namespace),
        (StringKey::RegistryConfig, &args.registry_config),
        (StringKey::RepositoryConfig, &args.repository_config),
        (StringKey::RepositoryCache, &args.repository_cache),
    ];
    for (key, value) in single {
        if let Some(value) = value {
            config.set_string(key, vec![value.clone()]);
        }
    }
    if !args.chart_values.is_empty() {
        config.set_string(StringKey::ChartValues, args.chart_values.clone());
    }
    if !args.kube_as_group.is_empty() {
        config.set_string(StringKey::KubeAsGroups, args.kube_as_group.clone());
    }

    Ok(verifier)
}

/// Where `--write-to-file` puts the report, relative to `base`.
pub fn report_path(base: &Path, format: Format) -> PathBuf {
    base.join(REPORT_DIR)
        .join(format!("report.{}", format.extension()))
}

/// Run the verifier and return the report.
pub fn run(args: &VerifyArgs) -> Result<Report> {
    let mut verifier = build_verifier(args)?;
    let executor = CatalogExecutor::with_builtin_checks();
    verifier.run(&args.chart_uri, &executor)?;
    verifier
        .into_report()
        .context("Verifier completed without a report")
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let report = run(&args)?;
    let content = report.to_text(args.output)?;

    if args.write_to_file {
        let path = report_path(Path::new("."), args.output);
        write_output(&content, Some(&path))?;
        info!(path = %path.display(), "report written");
        eprintln!("{} report written to {}", "✓".green(), path.display());
    } else {
        write_output(&content, None)?;
    }
    Ok(())
}
