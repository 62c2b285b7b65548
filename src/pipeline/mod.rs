//! Rename pipeline module
//!
//! This module contains the components that tie discovery, extraction, and
//! name synthesis together into the conflict-checked rename pipeline.

mod context;
mod engine;
mod plan;

pub use context::RunStats;
pub use engine::{ProcessingOptions, RenameMode, process_directory};
pub use plan::{Outcome, SkipReason};
