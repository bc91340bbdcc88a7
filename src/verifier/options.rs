use std::time::Duration;

use crate::checks::CheckId;
use crate::config::values::value_to_string;
use crate::config::{BooleanKey, ConfigStore, DurationKey, StringKey, Values, ValuesKey};

/// Client timeout forwarded to the execution collaborator when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Chart value overrides, one map per source. Groups are never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueOverrides {
    pub chart_set: Values,
    pub chart_set_file: Values,
    pub chart_set_string: Values,
    /// Verifier settings from `--set`, e.g. `profile.vendortype`.
    pub command_set: Values,
    /// Paths of chart values files (`--chart-values`).
    pub value_files: Vec<String>,
}

impl ValueOverrides {
    /// The `chart-overrides` string recorded in the report.
    pub fn chart_overrides(&self) -> String {
        set_args(&self.chart_set).join(",")
    }
}

/// Render a values group as `key=value` arguments, sorted by key.
pub fn set_args(values: &Values) -> Vec<String> {
    values
        .iter()
        .map(|(key, value)| format!("{key}={}", value_to_string(value)))
        .collect()
}

/// Cluster and helm environment settings, passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterSettings {
    pub kube_apiserver: Option<String>,
    pub kube_as_user: Option<String>,
    pub kube_as_groups: Vec<String>,
    pub kube_ca_file: Option<String>,
    pub kube_context: Option<String>,
    pub kube_token: Option<String>,
    pub kubeconfig: Option<String>,
    pub namespace: Option<String>,
    pub registry_config: Option<String>,
    pub repository_config: Option<String>,
    pub repository_cache: Option<String>,
    pub config: Option<String>,
}

/// Everything the execution collaborator needs for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionOptions {
    pub bundle_uri: String,
    /// Enabled checks in catalog order.
    pub checks: Vec<CheckId>,
    pub values: ValueOverrides,
    pub cluster: ClusterSettings,
    pub openshift_version: Option<String>,
    pub provider_delivery: bool,
    pub suppress_error_log: bool,
    pub timeout: Duration,
}

impl ExecutionOptions {
    /// Project a validated store into execution options.
    pub fn from_config(bundle_uri: &str, config: &ConfigStore) -> Self {
        let values = |key: ValuesKey| config.values(key).cloned().unwrap_or_default();
        let first = |key: StringKey| {
            config
                .strings(key)
                .and_then(|list| list.first())
                .cloned()
                .filter(|s| !s.is_empty())
        };
        let all = |key: StringKey| config.strings(key).map(<[String]>::to_vec).unwrap_or_default();

        Self {
            bundle_uri: bundle_uri.to_string(),
            checks: config.checks().enabled_checks(),
            values: ValueOverrides {
                chart_set: values(ValuesKey::ChartSet),
                chart_set_file: values(ValuesKey::ChartSetFile),
                chart_set_string: values(ValuesKey::ChartSetString),
                command_set: values(ValuesKey::CommandSet),
                value_files: all(StringKey::ChartValues),
            },
            cluster: ClusterSettings {
                kube_apiserver: first(StringKey::KubeApiServer),
                kube_as_user: first(StringKey::KubeAsUser),
                kube_as_groups: all(StringKey::KubeAsGroups),
                kube_ca_file: first(StringKey::KubeCaFile),
                kube_context: first(StringKey::KubeContext),
                kube_token: first(StringKey::KubeToken),
                kubeconfig: first(StringKey::KubeConfig),
                namespace: first(StringKey::Namespace),
                registry_config: first(StringKey::RegistryConfig),
                repository_config: first(StringKey::RepositoryConfig),
                repository_cache: first(StringKey::RepositoryCache),
                config: first(StringKey::Config),
            },
            openshift_version: first(StringKey::OpenshiftVersion),
            provider_delivery: config.boolean(BooleanKey::ProviderDelivery).unwrap_or(false),
            suppress_error_log: config.boolean(BooleanKey::SuppressErrorLog).unwrap_or(false),
            timeout: config.duration(DurationKey::Timeout).unwrap_or(DEFAULT_TIMEOUT),
        }
    }
}
