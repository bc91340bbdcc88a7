//! Integration tests for chart verification flows
//!
//! These tests drive the library end to end: configure a verifier, run it
//! against a chart on disk and summarize the resulting report.

pub mod helpers;
pub mod summary_flow;
pub mod verify_flow;
