use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, directory_not_found_error, generic_error};

/// Resolves the directory argument into an existing directory path
///
/// Tilde expressions are expanded before the check, so `~/Invoices` works
/// the same way it would in a shell.
///
/// # Arguments
/// * `raw` - The directory argument as given on the command line
///
/// # Returns
/// * `Result<PathBuf>` - The resolved directory path
///
/// # Errors
/// Returns an error if the path does not exist or is not a directory
pub fn resolve_directory(raw: &str) -> Result<PathBuf> {
    let expanded = tilde(raw);
    let path = PathBuf::from(expanded.as_ref());

    if !path.is_dir() {
        return Err(directory_not_found_error(path));
    }

    Ok(path)
}

/// Returns the stem of a filename, i.e. the part before the last dot
///
/// Filenames without a dot are returned unchanged.
pub fn filename_stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(index) => &filename[..index],
        None => filename,
    }
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir())?;
    }
    Ok(folder)
}

#[cfg(unix)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.starts_with('.'))
}

#[cfg(windows)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    if let Ok(metadata) = path.metadata() {
        metadata.file_attributes() & 0x2 != 0 // FILE_ATTRIBUTE_HIDDEN
    } else {
        false
    }
}
