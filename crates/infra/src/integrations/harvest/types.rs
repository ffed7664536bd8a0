//! Harvest wire types that are not part of the domain model.

use harvestmine_domain::TimeEntry;
use serde::{Deserialize, Serialize};

/// Response of `GET /account/who_am_i`.
#[derive(Debug, Clone, Deserialize)]
pub struct WhoAmI {
    pub user: HarvestUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarvestUser {
    pub id: u64,
    #[serde(default)]
    pub email: String,
}

/// Body of `POST /daily/update/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateEntryRequest<'a> {
    pub notes: &'a str,
    pub hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_at: Option<&'a str>,
}

impl<'a> From<&'a TimeEntry> for UpdateEntryRequest<'a> {
    fn from(entry: &'a TimeEntry) -> Self {
        Self { notes: &entry.notes, hours: entry.hours, spent_at: entry.spent_at.as_deref() }
    }
}
