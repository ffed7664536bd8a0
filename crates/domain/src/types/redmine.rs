//! Redmine resources used by the synchronizer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sync::TicketId;

/// Redmine time entry activity identifier
pub type ActivityId = u32;

/// Redmine user identifier
pub type UserId = u32;

/// Identifier of a time entry created in Redmine
pub type RedmineEntryId = u64;

/// Time entry activity (e.g. `Development`, `Meeting`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
}

impl Activity {
    #[must_use]
    pub fn new(id: ActivityId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Issue a time entry is billed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: TicketId,
    #[serde(default)]
    pub subject: String,
}

/// The user owning the API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedmineUser {
    pub id: UserId,
    #[serde(default)]
    pub login: String,
}

/// Time entry to be created in Redmine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTimeEntry {
    pub issue_id: TicketId,
    pub activity_id: ActivityId,
    pub spent_on: NaiveDate,
    pub user_id: UserId,
    pub hours: f64,
    pub comments: String,
}
