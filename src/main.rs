use anyhow::Result;
use human_panic::setup_panic;

use file_rename::cli::{build_command, get_log_file, get_processing_options, get_verbosity};
use file_rename::logging::init_logger;
use file_rename::pipeline::process_directory;

fn main() -> Result<()> {
    setup_panic!();

    let matches = build_command().get_matches();

    let verbosity = get_verbosity(&matches);
    let log_file = get_log_file(&matches)?;
    init_logger(verbosity, &log_file)?;

    let options = get_processing_options(&matches)?;
    process_directory(&options)?;

    Ok(())
}
