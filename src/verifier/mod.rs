//! Verification runs: options, execution and the verifier lifecycle.

mod builtin;
pub mod bundle;
mod executor;
mod options;
mod runner;
mod state;


pub use bundle::LocalBundle;
pub use executor::{CatalogExecutor, Check, CheckExecutor, CheckResult};
pub use options::{set_args, ClusterSettings, ExecutionOptions, ValueOverrides, DEFAULT_TIMEOUT};
pub use runner::Verifier;
pub use state::RunState;
