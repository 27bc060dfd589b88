//! Synchronization of the sheets into stored agenda records

pub mod config;
pub mod orchestrator;

pub use config::*;
pub use orchestrator::*;
