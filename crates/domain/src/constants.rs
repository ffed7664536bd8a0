//! Domain constants shared by the engine, the clients and the CLI.

/// Text appended to Harvest notes once an entry has been copied to Redmine.
pub const LOGGED_MARKER: &str = "Logged";

/// Activity used when an entry's Harvest task has no Redmine counterpart.
pub const DEFAULT_ACTIVITY: &str = "Development";

/// Prefix that turns a note into an explicit ticket reference (`#4521`).
pub const TICKET_PREFIX: char = '#';

/// Date format used on the Redmine API (`spent_on`).
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format used in the end-of-run report.
pub const REPORT_DATE_FORMAT: &str = "%d-%m-%Y";
