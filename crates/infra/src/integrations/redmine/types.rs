//! Redmine JSON envelopes.

use harvestmine_domain::constants::API_DATE_FORMAT;
use harvestmine_domain::{
    Activity, ActivityId, Issue, NewTimeEntry, RedmineEntryId, RedmineUser, TicketId, UserId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: RedmineUser,
}

#[derive(Debug, Deserialize)]
pub struct ActivitiesEnvelope {
    #[serde(default)]
    pub time_entry_activities: Vec<Activity>,
}

#[derive(Debug, Deserialize)]
pub struct IssueEnvelope {
    pub issue: Issue,
}

/// `{"time_entry": {...}}` wrapper used for both request and response.
#[derive(Debug, Serialize, Deserialize)]
pub struct TimeEntryEnvelope<T> {
    pub time_entry: T,
}

#[derive(Debug, Deserialize)]
pub struct CreatedTimeEntry {
    pub id: RedmineEntryId,
}

/// Body of `POST /time_entries.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntryPayload {
    pub issue_id: TicketId,
    pub spent_on: String,
    pub hours: f64,
    pub activity_id: ActivityId,
    pub comments: String,
    pub user_id: UserId,
}

impl From<&NewTimeEntry> for TimeEntryPayload {
    fn from(entry: &NewTimeEntry) -> Self {
        Self {
            issue_id: entry.issue_id,
            spent_on: entry.spent_on.format(API_DATE_FORMAT).to_string(),
            hours: entry.hours,
            activity_id: entry.activity_id,
            comments: entry.comments.clone(),
            user_id: entry.user_id,
        }
    }
}

/// Error body returned with HTTP 422.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorsBody {
    #[serde(default)]
    pub errors: Vec<String>,
}
