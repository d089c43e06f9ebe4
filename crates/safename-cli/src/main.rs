//! safename - make file names valid on FAT/exFAT or POSIX portable file systems
//!
//! Usage:
//!   safename [OPTIONS] FILES...     Rename the given files
//!   safename -r DIRECTORY           Rename a whole directory tree
//!   safename --help                 Show help

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    init_logging(args.verbose);
    cli::run(args)
}

/// Filter used when `RUST_LOG` is unset. Diagnostics are printed by the
/// report, so library warnings would only repeat them.
fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "error"
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
