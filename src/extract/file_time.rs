//! Date extraction from file timestamps

use std::path::Path;

use chrono::{DateTime, Datelike, Local};
use log::debug;

use crate::errors::{Result, file_operation_error};

/// Derives (year, month) from a file's creation time
///
/// Falls back to the modification time on filesystems that do not record a
/// creation time. Times are interpreted in the local timezone.
///
/// # Arguments
/// * `path` - The path to the file
///
/// # Returns
/// * `Result<(i32, u32)>` - The year and month of the file's timestamp
///
/// # Errors
/// Returns an error if neither timestamp can be read
pub fn file_date(path: &Path) -> Result<(i32, u32)> {
    let metadata = path
        .metadata()
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "read metadata of"))?;

    let timestamp = match metadata.created() {
        Ok(created) => created,
        Err(_) => {
            debug!(
                "Creation time unavailable for {}, using modification time",
                path.display()
            );
            metadata
                .modified()
                .map_err(|e| file_operation_error(e, path.to_path_buf(), "read timestamp of"))?
        }
    };

    let datetime: DateTime<Local> = timestamp.into();
    Ok((datetime.year(), datetime.month()))
}
