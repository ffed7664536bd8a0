//! Harvest v1 HTTP client

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use harvestmine_core::TimeTrackingClient;
use harvestmine_domain::{DayEntries, Result, SyncError, TimeEntry};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::types::{UpdateEntryRequest, WhoAmI};
use crate::errors::status_error;
use crate::http::HttpClient;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Harvest client authenticated with email and password
pub struct HarvestClient {
    base_url: String,
    email: String,
    password: String,
    http_client: HttpClient,
}

impl fmt::Debug for HarvestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HarvestClient")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl HarvestClient {
    /// Create a client for the account at `base_url`
    ///
    /// No request is made until [`TimeTrackingClient::authenticate`].
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(crate::USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            email: email.into(),
            password: password.into(),
            http_client,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, format!("{}{path}", self.base_url))
            .basic_auth(&self.email, Some(&self.password))
    }

    /// Send the request and fail on any non-success status
    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = self.http_client.send(builder).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), body = %body, "Harvest request failed");
            return Err(status_error(status));
        }

        Ok(response)
    }

    async fn execute_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.execute(builder).await?;
        response.json::<T>().await.map_err(|e| {
            SyncError::Internal(format!("Failed to parse Harvest response: {e}"))
        })
    }
}

#[async_trait]
impl TimeTrackingClient for HarvestClient {
    async fn authenticate(&self) -> Result<()> {
        let who: WhoAmI = self.execute_json(self.request(Method::GET, "/account/who_am_i")).await?;
        info!(user_id = who.user.id, email = %who.user.email, "authenticated against Harvest");
        Ok(())
    }

    async fn get_day(&self, day_of_year: u32, year: i32) -> Result<DayEntries> {
        let path = format!("/daily/{day_of_year}/{year}");
        let day: DayEntries = self.execute_json(self.request(Method::GET, &path)).await?;
        debug!(day_of_year, year, entries = day.day_entries.len(), "fetched Harvest day");
        Ok(day)
    }

    async fn update(&self, entry: &TimeEntry) -> Result<()> {
        let path = format!("/daily/update/{}", entry.id);
        let body = UpdateEntryRequest::from(entry);
        self.execute(self.request(Method::POST, &path).json(&body)).await?;
        debug!(entry_id = entry.id, "updated Harvest entry");
        Ok(())
    }
}
