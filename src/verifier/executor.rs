use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use super::builtin;
use super::bundle::LocalBundle;
use super::options::ExecutionOptions;
use crate::checks::CheckType;
use crate::profiles::{ProfileSet, DEFAULT_PROFILE, DEFAULT_PROFILE_VERSION};
use crate::report::{Digests, ProfileInfo, Report};

/// Loads a bundle, runs the selected checks and returns the populated report.
///
/// Errors are returned to the caller unchanged.
pub trait CheckExecutor {
    fn execute(&self, options: &ExecutionOptions) -> Result<Report>;
}

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub passed: bool,
    pub reason: String,
}

impl CheckResult {
    pub fn pass(reason: impl Into<String>) -> Self {
        Self {
            passed: true,
            reason: reason.into(),
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: reason.into(),
        }
    }
}

/// A single check implementation.
pub trait Check {
    fn run(&self, bundle: &LocalBundle, options: &ExecutionOptions) -> Result<CheckResult>;
}

impl<F> Check for F
where
    F: Fn(&LocalBundle, &ExecutionOptions) -> Result<CheckResult>,
{
    fn run(&self, bundle: &LocalBundle, options: &ExecutionOptions) -> Result<CheckResult> {
        self(bundle, options)
    }
}

/// Executes catalog checks against a local bundle.
///
/// Selected checks without a registered implementation are reported with
/// outcome `UNKNOWN`.
pub struct CatalogExecutor {
    checks: BTreeMap<String, Box<dyn Check>>,
    profiles: ProfileSet,
}

impl Default for CatalogExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogExecutor {
    /// An executor with no check implementations registered.
    pub fn new() -> Self {
        Self {
            checks: BTreeMap::new(),
            profiles: ProfileSet::default(),
        }
    }

    /// An executor with the file-based checks that need no cluster access.
    pub fn with_builtin_checks() -> Self {
        let mut executor = Self::new();
        builtin::register_all(&mut executor);
        executor
    }

    /// Register (or replace) the implementation for a catalog check name.
    pub fn register(&mut self, name: &str, check: impl Check + 'static) -> &mut Self {
        self.checks.insert(name.to_string(), Box::new(check));
        self
    }

    pub fn with_profiles(mut self, profiles: ProfileSet) -> Self {
        self.profiles = profiles;
        self
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }
}

impl CheckExecutor for CatalogExecutor {
    fn execute(&self, options: &ExecutionOptions) -> Result<Report> {
        let bundle = LocalBundle::open(&options.bundle_uri)
            .with_context(|| format!("Failed to load chart {}", options.bundle_uri))?;
        let profile = self
            .profiles
            .resolve_from_values(&options.values.command_set);

        let mut report = Report::new();
        report.metadata.chart_data = bundle.chart().cloned();
        report.metadata.overrides = options.values.chart_overrides();

        let tool = &mut report.metadata.tool;
        tool.profile = match profile {
            Some(profile) => ProfileInfo {
                vendor_type: profile.vendor_type.clone(),
                version: profile.version.clone(),
            },
            None => ProfileInfo {
                vendor_type: DEFAULT_PROFILE.to_string(),
                version: DEFAULT_PROFILE_VERSION.to_string(),
            },
        };
        tool.chart_uri = options.bundle_uri.clone();
        tool.provider_delivery = options.provider_delivery;
        tool.digests = Digests {
            chart: bundle.chart_digest().to_string(),
            package: bundle.package_digest().to_string(),
        };
        tool.last_certified_timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        if let Some(version) = &options.openshift_version {
            tool.tested_openshift_version = version.clone();
            tool.certified_openshift_versions = version.clone();
        }

        info!(
            chart = %options.bundle_uri,
            profile = %tool.profile.vendor_type,
            checks = options.checks.len(),
            "executing checks"
        );

        for id in &options.checks {
            let check_type = profile
                .and_then(|p| p.check_type(&id.to_string()))
                .unwrap_or(CheckType::Optional);
            let entry = report.add_check(id, check_type);

            let Some(check) = self.checks.get(&id.name) else {
                warn!(check = %id, "no implementation registered, outcome unknown");
                continue;
            };
            let result = check
                .run(&bundle, options)
                .with_context(|| format!("Check {id} failed to run"))?;
            debug!(check = %id, passed = result.passed, "check complete");
            entry.set_result(result.passed, result.reason);
        }

        Ok(report)
    }
}
