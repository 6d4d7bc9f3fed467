//! Command line client: argument parsing, context setup and terminal output.

mod args;
mod handlers;
mod render;

use args::Cli;
use clap::Parser;
use notecase::error::Result;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    handlers::dispatch(cli.command)
}

/// Logs go to stderr; `NOTECASE_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "notecase=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("NOTECASE_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
