//! Typed configuration store for a verification run.

pub mod keys;
mod store;
pub mod values;


pub use keys::{BooleanKey, DurationKey, StringKey, ValuesKey};
pub use store::ConfigStore;
pub use values::Values;
