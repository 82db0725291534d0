mod cli;
mod commands;
mod installers;
mod libs;
mod logger;
mod schemas;

use clap::Parser;
use cli::args::Cli;
use commands::{install, list};
use installers::github::GitHubClient;
use schemas::errors::{GetGovcError, Stage};
use std::process::ExitCode;

/// Prints a fatal error with the marker message for the stage it came from.
fn report_failure(err: &GetGovcError) {
    match err.stage() {
        Stage::Lookup => log_error!("❌ {}", err),
        Stage::Install => log_error!("❌ Error during download or extraction: {}", err),
        Stage::Verify => log_error!("❌ {}", err),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.debug, cli.quiet);

    let settings = cli.settings();
    log_debug!("Resolved settings: {:?}", settings);
    let client = GitHubClient::new();

    let result = if cli.print {
        list::run(&client, &settings)
    } else {
        install::run(&client, &settings, &cli.ver).map(|_| ())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}
