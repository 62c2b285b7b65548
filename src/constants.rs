/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
///
/// This is used as part of the application's unique identifier.
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
///
/// This is used as part of the application's unique identifier.
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// log file paths and application identification.
pub const APPLICATION: &str = "file_rename";

/// Characters that are stripped from synthesized filenames
///
/// The set covers the characters Windows rejects plus both path separators,
/// so a generated name can never escape its directory.
pub const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Help text for the directory positional argument
pub const DIRECTORY_HELP: &str = "Directory containing the files to rename";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Preview changes without renaming any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the normalize command-line option
pub const NORMALIZE_HELP: &str =
    "Lowercase the name and invoice number and join whitespace runs with hyphens";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Name of the log file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Write the log file to the current directory instead of the config directory";

/// Default name for the log file
pub const LOG_FILE_DEFAULT: &str = "file_rename.log";

/// About text for the epub subcommand
pub const EPUB_ABOUT: &str = "Rename epub files to 'Author - Title.epub' using their metadata";

/// About text for the invoice-date subcommand
pub const INVOICE_DATE_ABOUT: &str =
    "Rename invoice PDFs to 'yyyy-mm company invoice_no.pdf' using a date found in the text";

/// About text for the invoice-ctime subcommand
pub const INVOICE_CTIME_ABOUT: &str =
    "Rename invoice PDFs to 'yyyy-mm company invoice_no.pdf' using the file creation time";

/// About text for the invoice-split subcommand
pub const INVOICE_SPLIT_ABOUT: &str =
    "Rename 'YYYY-MM-DD - name - invoice_no.pdf' files to 'YYYY-MM-DD_name_invoice_no.pdf'";
