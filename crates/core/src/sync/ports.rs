//! Port interfaces for sync operations
//!
//! These traits define the boundaries between the sync engine and the
//! Harvest/Redmine clients. Implementations carry their own credentials.

use async_trait::async_trait;
use harvestmine_domain::{
    Activity, DayEntries, Issue, NewTimeEntry, RedmineEntryId, RedmineUser, Result, TicketId,
    TimeEntry,
};

/// Trait for the time-tracking side (Harvest)
#[async_trait]
pub trait TimeTrackingClient: Send + Sync {
    /// Verify the configured credentials
    async fn authenticate(&self) -> Result<()>;

    /// Fetch the authenticated user's entries for one day
    async fn get_day(&self, day_of_year: u32, year: i32) -> Result<DayEntries>;

    /// Persist an updated entry back to the service
    async fn update(&self, entry: &TimeEntry) -> Result<()>;
}

/// Trait for the issue-tracker side (Redmine)
#[async_trait]
pub trait IssueTrackerClient: Send + Sync {
    /// Verify the API key and return the user it belongs to
    async fn authenticate(&self) -> Result<RedmineUser>;

    /// List the time entry activities known to the tracker
    async fn list_activities(&self) -> Result<Vec<Activity>>;

    /// Look up an issue by number
    async fn get_issue(&self, ticket: TicketId) -> Result<Issue>;

    /// Create a time entry
    async fn create_time_entry(&self, entry: &NewTimeEntry) -> Result<RedmineEntryId>;
}
