//! Source enumeration module
//!
//! This module contains components for discovering candidate files
//! in the target directory.

mod scanner;

pub use scanner::{FileCandidate, scan_directory};
