//! Redmine error classification
//!
//! Sorts failed responses into categories and folds them into the domain
//! error at the client boundary.

use std::fmt;

use harvestmine_domain::SyncError;
use reqwest::StatusCode;

use super::types::ErrorsBody;

/// Redmine error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedmineErrorCategory {
    /// API key rejected (401, 403)
    Authentication,

    /// Resource does not exist (404)
    NotFound,

    /// Redmine refused the payload (422 with an `errors` list)
    Validation,

    /// Redmine is down or overloaded (5xx, 429)
    ServerUnavailable,

    /// Anything else
    Unknown,
}

impl fmt::Display for RedmineErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authentication => write!(f, "Authentication Failed"),
            Self::NotFound => write!(f, "Not Found"),
            Self::Validation => write!(f, "Validation Error"),
            Self::ServerUnavailable => write!(f, "Server Unavailable"),
            Self::Unknown => write!(f, "Unknown Error"),
        }
    }
}

/// Failed Redmine response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedmineError {
    category: RedmineErrorCategory,
    status: StatusCode,
    messages: Vec<String>,
}

impl RedmineError {
    /// Classify a status code and the raw response body
    ///
    /// A 422 body of the form `{"errors": [...]}` contributes its messages;
    /// other bodies are ignored.
    #[must_use]
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let category = match status.as_u16() {
            401 | 403 => RedmineErrorCategory::Authentication,
            404 => RedmineErrorCategory::NotFound,
            422 => RedmineErrorCategory::Validation,
            429 | 500..=599 => RedmineErrorCategory::ServerUnavailable,
            _ => RedmineErrorCategory::Unknown,
        };

        let messages = if category == RedmineErrorCategory::Validation {
            serde_json::from_str::<ErrorsBody>(body).map(|parsed| parsed.errors).unwrap_or_default()
        } else {
            Vec::new()
        };

        Self { category, status, messages }
    }

    #[must_use]
    pub const fn category(&self) -> RedmineErrorCategory {
        self.category
    }

    /// Messages reported by Redmine, if any
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    fn status_text(&self) -> String {
        format!(
            "HTTP {} {}",
            self.status.as_u16(),
            self.status.canonical_reason().unwrap_or("unknown status")
        )
    }

    /// Convert to domain error type
    #[must_use]
    pub fn into_domain_error(self) -> SyncError {
        match self.category {
            RedmineErrorCategory::Authentication => SyncError::Auth(self.status_text()),
            RedmineErrorCategory::NotFound => SyncError::NotFound(self.status_text()),
            RedmineErrorCategory::Validation if !self.messages.is_empty() => {
                SyncError::Submission(self.messages.join(", "))
            }
            RedmineErrorCategory::Validation => SyncError::InvalidInput(self.status_text()),
            RedmineErrorCategory::ServerUnavailable => SyncError::Network(self.status_text()),
            RedmineErrorCategory::Unknown => SyncError::Internal(self.status_text()),
        }
    }
}

impl fmt::Display for RedmineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.status_text())?;
        if !self.messages.is_empty() {
            write!(f, " ({})", self.messages.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for RedmineError {}

impl From<RedmineError> for SyncError {
    fn from(err: RedmineError) -> Self {
        err.into_domain_error()
    }
}
