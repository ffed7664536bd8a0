//! harvestmine - copy Harvest time entries into Redmine

use std::process::ExitCode;

use clap::Parser;
use console::style;
use harvestmine_cli::{logging, run, Cli};
use harvestmine_domain::SyncError;

#[tokio::main]
async fn main() -> ExitCode {
    // .env must be loaded before clap reads env-backed arguments
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            if let Some(sync_err) = err.downcast_ref::<SyncError>() {
                tracing::error!(kind = sync_err.label(), "run failed");
            }
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
