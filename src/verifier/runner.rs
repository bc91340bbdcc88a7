use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use super::executor::CheckExecutor;
use super::options::{ExecutionOptions, DEFAULT_TIMEOUT};
use super::state::RunState;
use crate::config::{BooleanKey, ConfigStore, DurationKey, Values, ValuesKey};
use crate::error::{Error, Result};
use crate::profiles::{
    DEFAULT_PROFILE, DEFAULT_PROFILE_VERSION, VENDOR_TYPE_CONFIG_NAME, VERSION_CONFIG_NAME,
};
use crate::report::Report;
use crate::TOOL_VERSION;

/// One verification run: configuration, validation, execution and the
/// resulting report.
///
/// A verifier runs at most once. Construct a new one to retry.
#[derive(Debug)]
pub struct Verifier {
    id: Uuid,
    config: ConfigStore,
    state: RunState,
    report: Option<Report>,
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Verifier {
    /// A verifier with default settings: both booleans off, a 30 minute
    /// timeout, every check enabled and the default profile selected.
    pub fn new() -> Self {
        let mut config = ConfigStore::new();
        let profile: Values = [
            (VENDOR_TYPE_CONFIG_NAME.to_string(), Value::from(DEFAULT_PROFILE)),
            (VERSION_CONFIG_NAME.to_string(), Value::from(DEFAULT_PROFILE_VERSION)),
        ]
        .into_iter()
        .collect();
        config
            .set_boolean(BooleanKey::ProviderDelivery, false)
            .set_boolean(BooleanKey::SuppressErrorLog, false)
            .set_duration(DurationKey::Timeout, DEFAULT_TIMEOUT)
            .set_values(ValuesKey::CommandSet, profile);
        Self::with_config(config)
    }

    /// A verifier over a fully prepared store. No defaults are added.
    pub fn with_config(config: ConfigStore) -> Self {
        let id = Uuid::new_v4();
        debug!(%id, "verifier created");
        Self {
            id,
            config,
            state: RunState::Configuring,
            report: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Read-only view of the configuration, available in every state.
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Mutable configuration, only before `run`.
    pub fn configure(&mut self) -> Result<&mut ConfigStore> {
        if self.state != RunState::Configuring {
            return Err(Error::InvalidState {
                from: self.state.to_string(),
                to: RunState::Configuring.to_string(),
            });
        }
        Ok(&mut self.config)
    }

    /// Validate the configuration, execute the selected checks against
    /// `bundle_uri` and keep the finalized report.
    ///
    /// An empty URI is rejected before anything else and leaves the verifier
    /// configurable. Any later failure leaves it `Failed` with no report.
    pub fn run(&mut self, bundle_uri: &str, executor: &dyn CheckExecutor) -> Result<&Report> {
        if self.state != RunState::Configuring {
            return Err(Error::InvalidState {
                from: self.state.to_string(),
                to: RunState::Validated.to_string(),
            });
        }
        if bundle_uri.is_empty() {
            return Err(Error::MissingArgument("chart_uri"));
        }

        if let Err(err) = self.config.validate() {
            debug!(error = %err, "configuration rejected");
            self.advance(RunState::Failed)?;
            return Err(err);
        }
        self.advance(RunState::Validated)?;

        let options = ExecutionOptions::from_config(bundle_uri, &self.config);
        info!(
            id = %self.id,
            chart = bundle_uri,
            checks = ?options.checks.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "running verifier"
        );

        self.advance(RunState::Executing)?;
        match executor.execute(&options) {
            Ok(mut report) => {
                report.finalize(TOOL_VERSION, bundle_uri);
                self.advance(RunState::Completed)?;
                info!(id = %self.id, results = report.results.len(), "verification complete");
                Ok(&*self.report.insert(report))
            }
            Err(err) => {
                self.advance(RunState::Failed)?;
                Err(Error::Execution(err))
            }
        }
    }

    /// The report of a completed run.
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn into_report(self) -> Option<Report> {
        self.report
    }

    fn advance(&mut self, next: RunState) -> Result<()> {
        self.state = self.state.try_transition(next)?;
        Ok(())
    }
}
