//! Renames files in a directory according to metadata-derived or
//! pattern-derived naming conventions.
//!
//! The library is a linear pipeline shared by every renaming convention:
//! enumerate candidate files by extension, extract the components of the
//! new name, synthesize and sanitize the target filename, and perform a
//! conflict-checked rename. Each convention plugs its own extractor and
//! template into the shared executor.

pub mod cli;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod extract;
pub mod logging;
pub mod naming;
pub mod pipeline;
pub mod utils;

pub mod prelude {
    pub use crate::cli::{build_command, get_log_file, get_processing_options, get_verbosity};
    pub use crate::errors::{Error, Result};
    pub use crate::errors::{
        directory_not_found_error, file_operation_error, generic_error, glob_pattern_error,
        invalid_filename_error, metadata_unavailable_error, pattern_mismatch_error,
    };
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::pipeline::{ProcessingOptions, RenameMode, RunStats, process_directory};
}
