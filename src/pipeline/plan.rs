//! Per-candidate rename outcomes
//!
//! Each candidate moves through a small state machine:
//! pending (implicit) → skipped with a reason, or planned → applied
//! (live run) / reported (dry run).

use std::fmt;

/// Why a candidate was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Required fields could not be extracted
    MissingMetadata(String),
    /// The file already follows the target naming convention
    AlreadyCorrect,
    /// The computed target path exists and is a different file
    Collision,
    /// The operating system refused the rename
    RenameFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingMetadata(detail) => write!(f, "{detail}"),
            SkipReason::AlreadyCorrect => write!(f, "already in the target format"),
            SkipReason::Collision => write!(f, "target file already exists"),
            SkipReason::RenameFailed(detail) => write!(f, "{detail}"),
        }
    }
}

/// Terminal state of a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file was renamed
    Renamed,
    /// Dry-run mode: the rename was reported but not performed
    Reported,
    /// The candidate was skipped
    Skipped(SkipReason),
}

impl Outcome {
    /// Whether this outcome counts towards the renamed total
    ///
    /// Dry-run reports count the same way the original scripts counted
    /// their "would rename" lines.
    pub fn counts_as_renamed(&self) -> bool {
        matches!(self, Outcome::Renamed | Outcome::Reported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_as_renamed() {
        assert!(Outcome::Renamed.counts_as_renamed());
        assert!(Outcome::Reported.counts_as_renamed());
        assert!(!Outcome::Skipped(SkipReason::AlreadyCorrect).counts_as_renamed());
        assert!(!Outcome::Skipped(SkipReason::Collision).counts_as_renamed());
    }

    #[test]
    fn test_skip_reason_display() {
        let reason = SkipReason::MissingMetadata("missing author".to_string());
        assert_eq!(format!("{reason}"), "missing author");
        assert_eq!(
            format!("{}", SkipReason::Collision),
            "target file already exists"
        );
    }
}
