use chart_verifier::format::Format;
use chart_verifier::summary::SummaryKind;
use chart_verifier::validation::{clap_duration_parser, clap_set_arg_validator};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "chart-verifier")]
#[command(about = "Verify charts against a certification profile", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Log progress at info level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log at debug level
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify a chart and print the report
    Verify(VerifyCommand),

    /// Summarize a previously generated report
    Report {
        /// Which part of the report to show
        kind: SummaryKind,

        /// Path to the report (JSON or YAML)
        report_path: PathBuf,

        /// Override values, e.g. profile.vendortype=redhat
        #[arg(short, long, value_parser = clap_set_arg_validator)]
        set: Vec<String>,

        /// Files with override values (YAML or TOML)
        #[arg(short = 'f', long)]
        set_values: Vec<PathBuf>,

        /// Output format: json or yaml
        #[arg(short, long, default_value = "json")]
        output: Format,

        /// Write the summary to report-info.<format> instead of stdout
        #[arg(short, long)]
        write_to_file: bool,
    },
}

#[derive(Args)]
pub struct VerifyCommand {
    /// Chart directory or packaged chart
    pub chart_uri: String,

    /// Only run these checks (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    pub enable: Vec<String>,

    /// Run every check except these (comma separated)
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub disable: Vec<String>,

    /// Chart values on the command line (key=value)
    #[arg(short = 'S', long, value_delimiter = ',', value_parser = clap_set_arg_validator)]
    pub chart_set: Vec<String>,

    /// Chart values read from files (key=path)
    #[arg(short = 'G', long, value_delimiter = ',', value_parser = clap_set_arg_validator)]
    pub chart_set_file: Vec<String>,

    /// Chart string values on the command line (key=value)
    #[arg(short = 'X', long, value_delimiter = ',', value_parser = clap_set_arg_validator)]
    pub chart_set_string: Vec<String>,

    /// Chart values files
    #[arg(short = 'F', long)]
    pub chart_values: Vec<String>,

    /// Verifier settings, e.g. profile.vendortype=community
    #[arg(short, long, value_parser = clap_set_arg_validator)]
    pub set: Vec<String>,

    /// Files with verifier settings (YAML or TOML)
    #[arg(short = 'f', long)]
    pub set_values: Vec<PathBuf>,

    /// OpenShift version the chart is verified against
    #[arg(short = 'V', long)]
    pub openshift_version: Option<String>,

    /// Time limit for the checks, e.g. 30m or 1h30m
    #[arg(long, default_value = "30m", value_parser = clap_duration_parser)]
    pub timeout: Duration,

    /// The chart is delivered by the provider
    #[arg(short = 'd', long)]
    pub provider_delivery: bool,

    /// Do not log check errors
    #[arg(short = 'E', long)]
    pub suppress_error_log: bool,

    /// Output format: json or yaml
    #[arg(short, long, default_value = "yaml")]
    pub output: Format,

    /// Write the report to chartverifier/report.<format> instead of stdout
    #[arg(short, long)]
    pub write_to_file: bool,

    #[arg(long)]
    pub kube_apiserver: Option<String>,

    #[arg(long)]
    pub kube_as_user: Option<String>,

    #[arg(long)]
    pub kube_as_group: Vec<String>,

    #[arg(long)]
    pub kube_ca_file: Option<String>,

    #[arg(long)]
    pub kube_context: Option<String>,

    #[arg(long)]
    pub kube_token: Option<String>,

    #[arg(long)]
    pub kubeconfig: Option<String>,

    #[arg(short, long)]
    pub namespace: Option<String>,

    #[arg(long)]
    pub registry_config: Option<String>,

    #[arg(long)]
    pub repository_config: Option<String>,

    #[arg(long)]
    pub repository_cache: Option<String>,
}
