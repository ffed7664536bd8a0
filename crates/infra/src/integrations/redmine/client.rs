//! Redmine REST client

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use harvestmine_core::IssueTrackerClient;
use harvestmine_domain::{
    Activity, Issue, NewTimeEntry, RedmineEntryId, RedmineUser, Result, SyncError, TicketId,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::errors::RedmineError;
use super::types::{
    ActivitiesEnvelope, CreatedTimeEntry, IssueEnvelope, TimeEntryEnvelope, TimeEntryPayload,
    UserEnvelope,
};
use crate::http::HttpClient;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const API_KEY_HEADER: &str = "X-Redmine-API-Key";

/// Redmine client authenticated with an API key
pub struct RedmineClient {
    base_url: String,
    http_client: HttpClient,
}

impl fmt::Debug for RedmineClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedmineClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl RedmineClient {
    /// Create a client for the Redmine instance at `base_url`
    ///
    /// # Errors
    /// `SyncError::Config` if the key cannot be sent as a header value.
    pub fn new(base_url: impl Into<String>, api_key: &str) -> Result<Self> {
        let mut key = HeaderValue::from_str(api_key.trim())
            .map_err(|_| SyncError::Config("redmine.key contains invalid characters".into()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, key);

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(crate::USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { base_url: base_url.into().trim_end_matches('/').to_string(), http_client })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client.request(method, format!("{}{path}", self.base_url))
    }

    /// Send the request and classify any non-success status
    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = self.http_client.send(builder).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = RedmineError::from_response(status, &body);
            debug!(status = status.as_u16(), error = %err, "Redmine request failed");
            return Err(err.into());
        }

        Ok(response)
    }

    async fn execute_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.execute(builder).await?;
        response.json::<T>().await.map_err(|e| {
            SyncError::Internal(format!("Failed to parse Redmine response: {e}"))
        })
    }
}

#[async_trait]
impl IssueTrackerClient for RedmineClient {
    async fn authenticate(&self) -> Result<RedmineUser> {
        let envelope: UserEnvelope =
            self.execute_json(self.request(Method::GET, "/users/current.json")).await?;
        Ok(envelope.user)
    }

    async fn list_activities(&self) -> Result<Vec<Activity>> {
        let envelope: ActivitiesEnvelope = self
            .execute_json(self.request(Method::GET, "/enumerations/time_entry_activities.json"))
            .await?;
        debug!(count = envelope.time_entry_activities.len(), "listed Redmine activities");
        Ok(envelope.time_entry_activities)
    }

    async fn get_issue(&self, ticket: TicketId) -> Result<Issue> {
        let path = format!("/issues/{ticket}.json");
        let envelope: IssueEnvelope = self.execute_json(self.request(Method::GET, &path)).await?;
        Ok(envelope.issue)
    }

    async fn create_time_entry(&self, entry: &NewTimeEntry) -> Result<RedmineEntryId> {
        let body = TimeEntryEnvelope { time_entry: TimeEntryPayload::from(entry) };
        let created: TimeEntryEnvelope<CreatedTimeEntry> =
            self.execute_json(self.request(Method::POST, "/time_entries.json").json(&body)).await?;
        Ok(created.time_entry.id)
    }
}
