//! Per-run dependency container
//!
//! Owns the loaded configuration and the two service clients so nothing
//! lives in globals.

use std::sync::Arc;

use harvestmine_core::{SyncService, SyncSettings};
use harvestmine_domain::{Config, Result};
use harvestmine_infra::{HarvestClient, RedmineClient};

/// Everything a sync run needs, built once from config and credentials
pub struct SyncContext {
    pub config: Config,
    pub harvest: Arc<HarvestClient>,
    pub redmine: Arc<RedmineClient>,
}

impl SyncContext {
    /// Build both service clients from the loaded configuration
    ///
    /// # Errors
    /// `SyncError::Config` when the Redmine key is not a valid header value,
    /// or an error from building either HTTP client.
    pub fn new(config: Config, harvest_password: String) -> Result<Self> {
        let harvest = HarvestClient::new(
            config.harvest.url.as_str(),
            config.harvest.email.as_str(),
            harvest_password,
        )?;
        let redmine = RedmineClient::new(config.redmine.url.as_str(), &config.redmine.key)?;

        Ok(Self { config, harvest: Arc::new(harvest), redmine: Arc::new(redmine) })
    }

    /// A sync service over this context's clients
    #[must_use]
    pub fn service(&self, dry_run: bool) -> SyncService {
        let settings = SyncSettings::from_config(&self.config).with_dry_run(dry_run);
        SyncService::new(self.harvest.clone(), self.redmine.clone(), settings)
    }
}
