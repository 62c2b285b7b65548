use clap::{
    Arg, ArgMatches, Command, command, crate_authors, crate_description, crate_name, crate_version,
};

use crate::constants::{
    DIRECTORY_HELP, DRY_RUN_HELP, EPUB_ABOUT, INVOICE_CTIME_ABOUT, INVOICE_DATE_ABOUT,
    INVOICE_SPLIT_ABOUT, LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, NORMALIZE_HELP,
    VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::pipeline::{ProcessingOptions, RenameMode};
use crate::utils::{find_project_folder, resolve_directory};

/// Builds the top-level command with one subcommand per renaming convention
///
/// Defines the following global arguments:
/// - `verbose`: Increase verbosity level
/// - `log_file`: Name of the log file
/// - `log_locally`: Write the log file next to the current directory
///
/// Each subcommand takes the target `directory` and a `--dry-run` flag.
pub fn build_command() -> Command {
    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .global(true)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .global(true)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .global(true)
        .action(clap::ArgAction::SetTrue);

    let arg_normalize = Arg::new("normalize")
        .long("normalize")
        .help(NORMALIZE_HELP)
        .action(clap::ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(arg_verbose)
        .arg(log_file)
        .arg(log_locally)
        .subcommand(rename_subcommand("epub", EPUB_ABOUT))
        .subcommand(rename_subcommand("invoice-date", INVOICE_DATE_ABOUT))
        .subcommand(rename_subcommand("invoice-ctime", INVOICE_CTIME_ABOUT))
        .subcommand(rename_subcommand("invoice-split", INVOICE_SPLIT_ABOUT).arg(arg_normalize))
}

/// Builds a renaming subcommand with the arguments shared by all variants
fn rename_subcommand(name: &'static str, about: &'static str) -> Command {
    let arg_directory = Arg::new("directory")
        .help(DIRECTORY_HELP)
        .value_name("DIRECTORY")
        .required(true);

    // define arg for dry run
    let arg_dry = Arg::new("dry_run")
        .short('n')
        .long("dry-run")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    Command::new(name).about(about).arg(arg_directory).arg(arg_dry)
}

/// Builds the processing options from the parsed command-line arguments
///
/// # Arguments
/// * `matches` - The parsed command-line arguments
///
/// # Returns
/// * `Result<ProcessingOptions>` - The directory, renaming mode, and dry-run flag
///
/// # Errors
/// Returns an error if the directory does not exist or the subcommand is unknown
pub fn get_processing_options(matches: &ArgMatches) -> Result<ProcessingOptions> {
    let (name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| generic_error("A renaming subcommand is required"))?;

    let mode = match name {
        "epub" => RenameMode::Epub,
        "invoice-date" => RenameMode::InvoiceDate,
        "invoice-ctime" => RenameMode::InvoiceCtime,
        "invoice-split" => RenameMode::InvoiceSplit {
            normalize: sub_matches.get_flag("normalize"),
        },
        other => return Err(generic_error(&format!("Unknown subcommand: {other}"))),
    };

    let raw_directory = sub_matches
        .get_one::<String>("directory")
        .ok_or_else(|| generic_error("Directory argument not found"))?;
    let directory = resolve_directory(raw_directory)?;

    Ok(ProcessingOptions {
        directory,
        mode,
        dry_run: sub_matches.get_flag("dry_run"),
    })
}

/// Gets the verbosity level from the command-line arguments
///
/// This function extracts the verbosity level from the command-line arguments
/// by counting the occurrences of the "verbose" flag and converting it to
/// a LogLevel enum value.
///
/// # Arguments
/// * `matches` - The parsed command-line arguments
///
/// # Returns
/// * `LogLevel` - The verbosity level based on the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file path from the command-line arguments
///
/// By default the log file lives in the application's config directory; with
/// `--log-locally` the filename is used as given.
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()?;
        let path = folder.config_dir().join(filename);
        let path_str = path.as_path().to_str().ok_or_else(|| {
            generic_error(&format!("Failed to convert path to string: {path:?}"))
        })?;
        Ok(path_str.to_string())
    }
}
