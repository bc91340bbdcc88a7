pub mod common;
pub mod report;
pub mod verify;
