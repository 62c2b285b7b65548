//! Directory scanning functionality
//!
//! This module contains functions for finding candidate files by extension.

use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use log::debug;

use crate::errors::{Result, glob_pattern_error, invalid_filename_error};
use crate::utils::{filename_stem, is_hidden_file};

/// A candidate file found during scanning
///
/// Candidates are ephemeral: they are rediscovered on every run and never
/// persisted anywhere.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    /// The path to the file
    pub path: PathBuf,
    /// The filename of the file
    pub filename: String,
}

impl FileCandidate {
    /// Creates a new FileCandidate from a path
    ///
    /// # Arguments
    /// * `path` - The path to the file
    ///
    /// # Returns
    /// * `Result<FileCandidate>` - The candidate or an error
    ///
    /// # Errors
    /// Returns an error if the filename cannot be extracted or converted to a string
    pub fn new(path: PathBuf) -> Result<Self> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_string();

        Ok(FileCandidate { path, filename })
    }

    /// Returns the filename without its extension
    pub fn stem(&self) -> &str {
        filename_stem(&self.filename)
    }
}

/// Scans a directory for files with the given extension
///
/// Hidden files and subdirectories are skipped. Results come back in
/// directory-listing order, which is filesystem-dependent.
///
/// # Arguments
/// * `directory` - The directory to scan
/// * `extension` - The extension to match, without the leading dot
///
/// # Returns
/// * `Result<Vec<FileCandidate>>` - The candidate files found or an error
///
/// # Errors
/// Returns an error if the glob pattern cannot be built from the directory path
pub fn scan_directory(directory: &Path, extension: &str) -> Result<Vec<FileCandidate>> {
    debug!(
        "Scanning directory {} for *.{extension}",
        directory.display()
    );

    // Only the leaf is a pattern; metacharacters in the directory path
    // itself (e.g. "Invoices [2024]") must match literally.
    let directory_str = directory
        .to_str()
        .ok_or_else(|| invalid_filename_error(directory.to_path_buf()))?;
    let pattern = Path::new(&Pattern::escape(directory_str)).join(format!("*.{extension}"));
    let pattern_str = pattern
        .to_str()
        .ok_or_else(|| invalid_filename_error(pattern.clone()))?;

    let candidates: Vec<FileCandidate> = glob(pattern_str)
        .map_err(|e| glob_pattern_error(e, pattern_str))?
        .filter_map(std::result::Result::ok)
        .filter(|path| !is_hidden_file(path))
        .filter(|path| path.is_file())
        .filter_map(|path| FileCandidate::new(path).ok())
        .collect();

    debug!("Found {} candidate files", candidates.len());

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_scan_directory_filters_by_extension() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        File::create(temp_dir.path().join("one.pdf")).unwrap();
        File::create(temp_dir.path().join("two.pdf")).unwrap();
        File::create(temp_dir.path().join("notes.txt")).unwrap();

        let candidates = scan_directory(temp_dir.path(), "pdf").unwrap();

        // Only the two PDF files should be found
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| c.filename.ends_with(".pdf")));
    }

    #[test]
    fn test_scan_directory_skips_hidden_and_directories() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        File::create(temp_dir.path().join(".hidden.pdf")).unwrap();
        std::fs::create_dir(temp_dir.path().join("folder.pdf")).unwrap();
        File::create(temp_dir.path().join("real.pdf")).unwrap();

        let candidates = scan_directory(temp_dir.path(), "pdf").unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].filename, "real.pdf");
    }

    #[test]
    fn test_scan_directory_with_metacharacters_in_path() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let directory = temp_dir.path().join("Invoices [2024]");
        std::fs::create_dir(&directory).unwrap();
        File::create(directory.join("2024-03-15 - Acme Corp - INV 1.pdf")).unwrap();

        // Brackets in the directory name match literally, not as a pattern
        let candidates = scan_directory(&directory, "pdf").unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].filename, "2024-03-15 - Acme Corp - INV 1.pdf");
    }

    #[test]
    fn test_file_candidate_stem() {
        let candidate = FileCandidate::new(PathBuf::from("/books/Dune.epub")).unwrap();
        assert_eq!(candidate.stem(), "Dune");
        assert_eq!(candidate.filename, "Dune.epub");
    }
}
