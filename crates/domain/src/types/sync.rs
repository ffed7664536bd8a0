//! Sync outcomes and the activity lookup table.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::{EntryId, TimeEntry};
use super::redmine::ActivityId;
use crate::errors::SyncError;
use crate::impl_status_conversions;

/// Redmine issue number
pub type TicketId = u32;

/// Activity name → Redmine activity id, restricted to the configured names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityMap(BTreeMap<String, ActivityId>);

impl ActivityMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, id: ActivityId) {
        self.0.insert(name.into(), id);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<ActivityId> {
        self.0.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, ActivityId)> for ActivityMap {
    fn from_iter<I: IntoIterator<Item = (S, ActivityId)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, id)| (name.into(), id)).collect())
    }
}

/// Outcome of syncing one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncStatus {
    Logged,
    Failed,
    /// Resolved but not written (dry run)
    Skipped,
}

impl_status_conversions!(SyncStatus {
    Logged => "Logged",
    Failed => "Failed",
    Skipped => "Skipped",
});

/// Per-entry report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncResult {
    pub date: NaiveDate,
    pub entry_id: EntryId,
    pub ticket: Option<TicketId>,
    /// Hours as recorded in Harvest, before any rounding.
    pub hours: f64,
    pub status: SyncStatus,
    /// Empty on success.
    pub error: String,
}

impl SyncResult {
    #[must_use]
    pub fn logged(date: NaiveDate, entry: &TimeEntry, ticket: TicketId) -> Self {
        Self::build(date, entry, Some(ticket), SyncStatus::Logged, String::new())
    }

    #[must_use]
    pub fn skipped(date: NaiveDate, entry: &TimeEntry, ticket: TicketId) -> Self {
        Self::build(date, entry, Some(ticket), SyncStatus::Skipped, String::new())
    }

    #[must_use]
    pub fn failed(
        date: NaiveDate,
        entry: &TimeEntry,
        ticket: Option<TicketId>,
        error: impl Into<String>,
    ) -> Self {
        Self::build(date, entry, ticket, SyncStatus::Failed, error.into())
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status == SyncStatus::Failed
    }

    fn build(
        date: NaiveDate,
        entry: &TimeEntry,
        ticket: Option<TicketId>,
        status: SyncStatus,
        error: String,
    ) -> Self {
        Self { date, entry_id: entry.id, ticket, hours: entry.hours, status, error }
    }
}

/// Everything a run produced.
///
/// `aborted` holds the run-level error that stopped the run after it had
/// started processing dates. The rows gathered up to that point are kept
/// because their entries were already written to both services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncReport {
    pub results: Vec<SyncResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aborted: Option<SyncError>,
}

impl SyncReport {
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|result| result.is_failed()).count()
    }

    /// Whether every date was processed
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.aborted.is_none()
    }
}
