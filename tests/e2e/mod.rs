//! End-to-end tests for the chart-verifier binary

pub mod helpers;
pub mod report_command;
pub mod verify_command;

pub use helpers::*;
