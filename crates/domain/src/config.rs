//! Configuration structures
//!
//! Mirrors the two sections of the configuration file:
//!
//! ```toml
//! [harvest]
//! url = "https://example.harvestapp.com"
//! email = "me@example.com"
//! client = "Yellow"
//! activities = "Development,Meeting,Code Review"
//!
//! [redmine]
//! url = "https://redmine.example.com"
//! key = "0123abcd"
//! default_ticket = 37080
//! round_time = 0.25
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::DEFAULT_ACTIVITY;
use crate::types::TicketId;

/// Full application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub harvest: HarvestConfig,
    pub redmine: RedmineConfig,
}

/// Harvest connection and filtering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestConfig {
    pub url: String,
    pub email: String,
    /// Only entries booked for this client are synced.
    pub client: String,
    /// Activity names that must exist in Redmine.
    #[serde(deserialize_with = "comma_separated")]
    pub activities: Vec<String>,
}

/// Redmine connection and mapping settings
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct RedmineConfig {
    pub url: String,
    pub key: String,
    pub default_ticket: TicketId,
    #[serde(default = "default_activity")]
    pub default_activity: String,
    /// Rounding granularity in hours (`0.25` = quarter hour).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_time: Option<f64>,
}

impl fmt::Debug for RedmineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedmineConfig")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .field("default_ticket", &self.default_ticket)
            .field("default_activity", &self.default_activity)
            .field("round_time", &self.round_time)
            .finish()
    }
}

fn default_activity() -> String {
    DEFAULT_ACTIVITY.to_string()
}

/// Split a comma-separated list, trimming whitespace and dropping blanks.
#[must_use]
pub fn split_activities(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|name| !name.is_empty()).map(str::to_string).collect()
}

fn comma_separated<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Joined(String),
        List(Vec<String>),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Joined(raw) => split_activities(&raw),
        Raw::List(list) => list
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
    })
}
