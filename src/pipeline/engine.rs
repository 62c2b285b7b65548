//! Rename pipeline engine
//!
//! This module orchestrates the pipeline stages for one directory:
//! enumerate candidates, extract the fields for the new name, synthesize
//! the target filename, and perform the conflict-checked rename.

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use fs_extra::file::{CopyOptions, move_file};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::discovery::{FileCandidate, scan_directory};
use crate::errors::{Error, metadata_unavailable_error};
use crate::extract::{
    extract_epub_metadata, extract_invoice_date, file_date, split_company_invoice,
    split_dated_stem,
};
use crate::logging::format_message;
use crate::naming::{dated_invoice_filename, epub_filename, monthly_invoice_filename};

use super::context::RunStats;
use super::plan::{Outcome, SkipReason};

/// Matches stems that already carry a `YYYY-MM ` prefix
static MONTH_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}\s").expect("Failed to compile month prefix regex"));

/// The renaming convention to apply to a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameMode {
    /// `"{author} - {title}.epub"` from Dublin Core metadata
    Epub,
    /// `"{yyyy}-{mm} {company} {invoice_no}.pdf"`, date from the PDF text
    InvoiceDate,
    /// `"{yyyy}-{mm} {company} {invoice_no}.pdf"`, date from the file timestamp
    InvoiceCtime,
    /// `"{yyyy-mm-dd}_{name}_{invoice_no}.pdf"` from the existing filename
    InvoiceSplit { normalize: bool },
}

impl RenameMode {
    /// The file extension this mode operates on, without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            RenameMode::Epub => "epub",
            _ => "pdf",
        }
    }

    /// Whether this mode's target names start with a `YYYY-MM ` prefix
    ///
    /// Candidates that already carry the prefix are skipped before any
    /// extraction work happens.
    fn adds_month_prefix(&self) -> bool {
        matches!(self, RenameMode::InvoiceDate | RenameMode::InvoiceCtime)
    }
}

/// Options for processing a directory
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// The directory containing the files to rename
    pub directory: PathBuf,
    /// The renaming convention to apply
    pub mode: RenameMode,
    /// Whether to only report the renames instead of performing them
    pub dry_run: bool,
}

/// Processes one directory of files
///
/// Candidates are handled sequentially; no single candidate's failure aborts
/// the batch. A summary line is logged at the end and the accumulated
/// statistics are returned.
///
/// # Arguments
/// * `options` - The directory, renaming mode, and dry-run flag
///
/// # Returns
/// * `Result<RunStats>` - The statistics for the run or an error
///
/// # Errors
/// Returns an error if the directory cannot be enumerated
pub fn process_directory(options: &ProcessingOptions) -> Result<RunStats> {
    let mut stats = RunStats::new();

    let candidates = scan_directory(&options.directory, options.mode.extension())?;

    if candidates.is_empty() {
        info!(
            "No {} files found in {}",
            options.mode.extension(),
            options.directory.display()
        );
        return Ok(stats);
    }

    info!(
        "Processing {} files{}...",
        candidates.len(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    for candidate in &candidates {
        let outcome = process_candidate(candidate, options);
        stats.record(&outcome);
    }

    info!("{}", stats.summary(options.dry_run));

    Ok(stats)
}

/// Runs one candidate through the rename state machine
///
/// The transition rules are evaluated in order, first match wins:
/// missing metadata, already correct, collision, then the rename itself
/// (or its dry-run report).
fn process_candidate(candidate: &FileCandidate, options: &ProcessingOptions) -> Outcome {
    // Files already carrying the date prefix are skipped without opening them
    if options.mode.adds_month_prefix() && MONTH_PREFIX_RE.is_match(candidate.stem()) {
        info!("Already has date prefix: {}", candidate.filename);
        return Outcome::Skipped(SkipReason::AlreadyCorrect);
    }

    let target_name = match synthesize_target(candidate, &options.mode) {
        Ok(name) => name,
        Err(error) => {
            let detail = skip_detail(&error);
            info!("Skipping {}: {detail}", candidate.filename);
            return Outcome::Skipped(SkipReason::MissingMetadata(detail));
        }
    };

    let target = candidate.path.with_file_name(&target_name);

    if target == candidate.path {
        info!("Already named correctly: {}", candidate.filename);
        return Outcome::Skipped(SkipReason::AlreadyCorrect);
    }

    if target.exists() {
        let message = format!(
            "Skipping {}: target file {target_name} already exists",
            candidate.filename
        );
        let colored_message = format!(
            "Skipping {}: target file {} already exists",
            candidate.filename,
            target_name.as_str().yellow().bold()
        );
        warn!("{}", format_message(&message, &colored_message));
        return Outcome::Skipped(SkipReason::Collision);
    }

    if options.dry_run {
        info!("Would rename: {} -> {target_name}", candidate.filename);
        return Outcome::Reported;
    }

    execute_rename(candidate, &target, &target_name)
}

/// Performs the actual rename, surfacing operating-system failures
fn execute_rename(candidate: &FileCandidate, target: &Path, target_name: &str) -> Outcome {
    let options = CopyOptions::new();
    match move_file(&candidate.path, target, &options) {
        Ok(_) => {
            let message = format!("Renamed: {} -> {target_name}", candidate.filename);
            let colored_message = format!(
                "Renamed: {} -> {}",
                candidate.filename,
                target_name.green().bold()
            );
            info!("{}", format_message(&message, &colored_message));
            Outcome::Renamed
        }
        Err(e) => {
            warn!("Error renaming {}: {e}", candidate.filename);
            Outcome::Skipped(SkipReason::RenameFailed(e.to_string()))
        }
    }
}

/// Synthesizes the target filename for a candidate
///
/// # Errors
/// Returns an error when the required fields cannot be extracted from the
/// candidate's content, timestamps, or existing name
fn synthesize_target(candidate: &FileCandidate, mode: &RenameMode) -> crate::errors::Result<String> {
    match mode {
        RenameMode::Epub => match extract_epub_metadata(&candidate.path) {
            (Some(author), Some(title)) => Ok(epub_filename(&author, &title)),
            _ => Err(metadata_unavailable_error(
                candidate.path.clone(),
                "missing metadata",
            )),
        },
        RenameMode::InvoiceDate => {
            let fields = split_company_invoice(candidate.stem())?;
            let (year, month) = extract_invoice_date(&candidate.path).ok_or_else(|| {
                metadata_unavailable_error(candidate.path.clone(), "could not extract date")
            })?;
            Ok(monthly_invoice_filename(
                year,
                month,
                &fields.company,
                &fields.invoice_number,
            ))
        }
        RenameMode::InvoiceCtime => {
            let fields = split_company_invoice(candidate.stem())?;
            let (year, month) = file_date(&candidate.path)?;
            Ok(monthly_invoice_filename(
                year,
                month,
                &fields.company,
                &fields.invoice_number,
            ))
        }
        RenameMode::InvoiceSplit { normalize } => {
            let parsed = split_dated_stem(candidate.stem())?;
            Ok(dated_invoice_filename(&parsed, *normalize))
        }
    }
}

/// Maps an extraction error onto the per-candidate console wording
fn skip_detail(error: &Error) -> String {
    match error {
        Error::MetadataUnavailable { detail, .. } => detail.clone(),
        Error::PatternMismatch { .. } => "doesn't match pattern".to_string(),
        other => other.to_string(),
    }
}
