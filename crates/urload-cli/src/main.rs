use urload_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Log to the state dir; fall back to stderr so a read-only home never blocks startup.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("urload error: {:#}", err);
        std::process::exit(1);
    }
}
