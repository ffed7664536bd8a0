//! # harvestmine CLI
//!
//! Wires configuration, credentials, the service clients and the sync
//! engine together, then renders the report.

pub mod args;
pub mod context;
pub mod logging;
pub mod progress;
pub mod prompt;
pub mod report;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use harvestmine_domain::SyncResult;
use harvestmine_infra::config;
use tracing::info;

pub use args::{Cli, Command, OutputFormat, Period, SyncArgs};
pub use context::SyncContext;
pub use progress::ProgressObserver;

/// Exit status when the run finished but at least one entry failed
pub const ENTRY_FAILURE_EXIT: u8 = 2;

/// Execute the parsed command line and pick the process exit status
///
/// # Errors
/// Run-level failures: configuration, credentials prompt, connection,
/// unknown activities.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let Command::Sync(args) = cli.command;

    let config = config::load(cli.config)?;
    let password = prompt::harvest_password(&config.harvest.email)?;
    let context = SyncContext::new(config, password)?;

    let dates = args.selection().resolve(Local::now().date_naive());
    info!(days = dates.len(), dry_run = args.dry_run, "starting sync");

    let progress = ProgressObserver::new();
    let service = context.service(args.dry_run).with_observer(Arc::new(progress.clone()));
    let outcome = service.sync(&dates).await;
    progress.finish();
    let sync_report = outcome?;
    let results = &sync_report.results;

    match args.format {
        OutputFormat::Table => {
            println!("{}", report::render_table(results, console::colors_enabled()));
            println!("{}", report::summary(results));
        }
        OutputFormat::Json => println!("{}", report::render_json(results)?),
    }

    // rows above were already written; the run still counts as failed
    if let Some(err) = sync_report.aborted {
        return Err(err.into());
    }

    Ok(exit_code(results))
}

/// Success only when no entry failed
#[must_use]
pub fn exit_code(results: &[SyncResult]) -> ExitCode {
    if results.iter().any(SyncResult::is_failed) {
        ExitCode::from(ENTRY_FAILURE_EXIT)
    } else {
        ExitCode::SUCCESS
    }
}
