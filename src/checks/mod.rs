//! Check catalog, per-check enable status and user selection.

pub mod catalog;
mod registry;
mod selection;
mod types;


pub use catalog::{catalog, CATALOG_VERSION, CHECK_NAMES};
pub use registry::CheckRegistry;
pub use selection::CheckSelection;
pub use types::{CheckId, CheckStatus, CheckType};
