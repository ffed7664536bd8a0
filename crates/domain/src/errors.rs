//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for harvestmine
///
/// The first group of variants is the sync taxonomy: `Connection`, `Config`
/// and `UnknownActivities` abort a run, the remaining three are local to a
/// single entry. The transport group is produced by the HTTP clients and is
/// folded into the taxonomy at the engine boundary.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SyncError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Can't find these Harvest activity types in Redmine: {}", .0.join(", "))]
    UnknownActivities(Vec<String>),

    #[error("{0}")]
    EntryParse(String),

    #[error("{0}")]
    Submission(String),

    #[error("{0}")]
    Persistence(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SyncError {
    /// Stable label suitable for structured logging.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Connection(_) => "connection",
            Self::Config(_) => "config",
            Self::UnknownActivities(_) => "unknown_activities",
            Self::EntryParse(_) => "entry_parse",
            Self::Submission(_) => "submission",
            Self::Persistence(_) => "persistence",
            Self::Network(_) => "network",
            Self::Auth(_) => "auth",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }

    /// Re-label a client failure raised while connecting to `service`.
    #[must_use]
    pub fn into_connection(self, service: &str) -> Self {
        match self {
            Self::Connection(_) => self,
            other => Self::Connection(format!(
                "There is a problem with connecting to {service}: {other}"
            )),
        }
    }
}

/// Result type alias for harvestmine operations
pub type Result<T> = std::result::Result<T, SyncError>;
