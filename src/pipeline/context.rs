//! Run statistics
//!
//! This module defines the counters accumulated over a batch and the
//! wording of the trailing summary line.

use super::plan::{Outcome, SkipReason};

/// Statistics about a single run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of candidate files considered
    pub candidates: usize,
    /// Number of files renamed (or reported, in dry-run mode)
    pub renamed: usize,
    /// Number of files skipped, for whatever reason
    pub skipped: usize,
    /// Number of skips caused by operating-system rename failures
    pub errors: usize,
}

impl RunStats {
    /// Creates empty statistics
    pub fn new() -> Self {
        RunStats::default()
    }

    /// Records the outcome of one candidate
    pub fn record(&mut self, outcome: &Outcome) {
        self.candidates += 1;
        if outcome.counts_as_renamed() {
            self.renamed += 1;
        } else {
            self.skipped += 1;
            if matches!(outcome, Outcome::Skipped(SkipReason::RenameFailed(_))) {
                self.errors += 1;
            }
        }
    }

    /// Builds the trailing summary line for the run
    ///
    /// Empty directories never get this far; the engine reports them
    /// before any candidate is recorded.
    pub fn summary(&self, dry_run: bool) -> String {
        if dry_run {
            format!(
                "Dry run complete. {} file(s) would be renamed, {} skipped.",
                self.renamed, self.skipped
            )
        } else {
            format!(
                "Renamed {} file(s), {} skipped.",
                self.renamed, self.skipped
            )
        }
    }
}
