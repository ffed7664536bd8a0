//! Harvest day entries.

use serde::{Deserialize, Deserializer, Serialize};

/// Harvest time entry identifier
pub type EntryId = u64;

/// One recorded block of time as returned by Harvest's daily endpoint.
///
/// Only the fields the synchronizer reads are modelled; unknown fields in the
/// payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: EntryId,
    #[serde(default)]
    pub client: String,
    /// Harvest task name; doubles as the Redmine activity name.
    #[serde(default)]
    pub task: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent_at: Option<String>,
}

impl TimeEntry {
    /// Build an entry with only the fields the sync engine cares about.
    #[must_use]
    pub fn new(
        id: EntryId,
        client: impl Into<String>,
        task: impl Into<String>,
        notes: impl Into<String>,
        hours: f64,
    ) -> Self {
        Self {
            id,
            client: client.into(),
            task: task.into(),
            notes: notes.into(),
            hours,
            project: None,
            spent_at: None,
        }
    }
}

/// Response body of Harvest's `GET /daily/{day}/{year}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayEntries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_day: Option<String>,
    #[serde(default)]
    pub day_entries: Vec<TimeEntry>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
