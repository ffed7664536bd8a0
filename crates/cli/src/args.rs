//! Command-line definitions

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use harvestmine_core::DateSelection;

#[derive(Debug, Parser)]
#[command(name = "harvestmine")]
#[command(author, version, about = "Copy Harvest time entries into Redmine")]
pub struct Cli {
    /// Config file (TOML, JSON or INI); skips environment variables and probing
    #[arg(long, global = true, value_name = "PATH", env = "HARVESTMINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Copy unlogged entries for the selected days into Redmine
    Sync(SyncArgs),
}

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Relative period to sync
    #[arg(value_enum, required_unless_present = "date", conflicts_with = "date")]
    pub period: Option<Period>,

    /// Day (YYYY-MM-DD or DD-MM-YYYY) or whole month (MM/YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub date: Option<DateSelection>,

    /// Resolve tickets and activities without writing to either service
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl SyncArgs {
    /// The days this invocation targets
    #[must_use]
    pub fn selection(&self) -> DateSelection {
        self.date.or_else(|| self.period.map(DateSelection::from)).unwrap_or(DateSelection::Today)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Today,
    Yesterday,
    /// Monday to Friday of last week
    Week,
}

impl From<Period> for DateSelection {
    fn from(period: Period) -> Self {
        match period {
            Period::Today => Self::Today,
            Period::Yesterday => Self::Yesterday,
            Period::Week => Self::LastWeek,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn parse_date_arg(raw: &str) -> Result<DateSelection, String> {
    DateSelection::parse_date(raw).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clap::CommandFactory;

    use super::*;

    fn sync_args(argv: &[&str]) -> SyncArgs {
        let cli = Cli::try_parse_from(argv).expect("valid arguments");
        match cli.command {
            Command::Sync(args) => args,
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn relative_periods() {
        assert_eq!(sync_args(&["harvestmine", "sync", "today"]).selection(), DateSelection::Today);
        assert_eq!(
            sync_args(&["harvestmine", "sync", "yesterday"]).selection(),
            DateSelection::Yesterday
        );
        assert_eq!(sync_args(&["harvestmine", "sync", "week"]).selection(), DateSelection::LastWeek);
    }

    #[test]
    fn explicit_date() {
        let args = sync_args(&["harvestmine", "sync", "--date", "04-03-2024", "--dry-run"]);
        assert_eq!(
            args.selection(),
            DateSelection::Day(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
        );
        assert!(args.dry_run);
        assert_eq!(args.format, OutputFormat::Table);
    }

    #[test]
    fn month_date() {
        let args = sync_args(&["harvestmine", "sync", "--date", "03/2024", "--format", "json"]);
        assert_eq!(args.selection(), DateSelection::Month { year: 2024, month: 3 });
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "harvestmine", "sync", "today", "-vv", "--config", "/tmp/harvestmine.toml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/harvestmine.toml")));
    }

    #[test]
    fn sync_requires_a_period_or_date() {
        assert!(Cli::try_parse_from(["harvestmine", "sync"]).is_err());
    }

    #[test]
    fn period_and_date_conflict() {
        assert!(Cli::try_parse_from(["harvestmine", "sync", "today", "--date", "2024-03-04"])
            .is_err());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let err = Cli::try_parse_from(["harvestmine", "sync", "--date", "tomorrow"]).unwrap_err();
        assert!(err.to_string().contains("tomorrow"));
    }
}
