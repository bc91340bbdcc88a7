pub mod checks;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod profiles;
pub mod report;
pub mod summary;
pub mod validation;
pub mod verifier;

pub use error::{Error, KeyKind, Result};
pub use format::Format;

/// Version stamped into every report as `verifier-version`.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");
