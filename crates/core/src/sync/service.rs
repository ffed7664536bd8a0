//! Sync service - core business logic
//!
//! Copies unlogged Harvest entries into Redmine one at a time. Connection and
//! configuration failures found before the first fetch abort with an error.
//! A day that cannot be fetched stops the run but keeps the rows already
//! produced. Entry-level failures become a `Failed` row and the run moves on.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use harvestmine_domain::{
    ActivityMap, Config, NewTimeEntry, RedmineUser, Result, SyncError, SyncReport, SyncResult,
    TicketId, TimeEntry,
};
use tracing::{debug, error, info, warn};

use super::activities::{resolve_activities, resolve_activity};
use super::mapping::{resolve_destination, round_hours};
use super::marker::{LoggedMarker, NotesMarker};
use super::ports::{IssueTrackerClient, TimeTrackingClient};

/// Settings that drive one sync run
#[derive(Debug, Clone, PartialEq)]
pub struct SyncSettings {
    /// Harvest client whose entries are synced
    pub client_filter: String,
    /// Activity names that must exist in Redmine
    pub activities: Vec<String>,
    pub default_ticket: TicketId,
    pub default_activity: String,
    pub round_time: Option<f64>,
    /// Resolve everything but write nothing
    pub dry_run: bool,
}

impl SyncSettings {
    /// Derive settings from the loaded configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            client_filter: config.harvest.client.clone(),
            activities: config.harvest.activities.clone(),
            default_ticket: config.redmine.default_ticket,
            default_activity: config.redmine.default_activity.clone(),
            round_time: config.redmine.round_time,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Receives progress notifications while a run is in flight
pub trait SyncObserver: Send + Sync {
    /// Called once per date with the number of entries that will be processed
    fn on_entries_fetched(&self, date: NaiveDate, count: usize);

    /// Called after each entry, in processing order
    fn on_entry_processed(&self, result: &SyncResult);
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SyncObserver for NoopObserver {
    fn on_entries_fetched(&self, _date: NaiveDate, _count: usize) {}

    fn on_entry_processed(&self, _result: &SyncResult) {}
}

/// Harvest → Redmine sync service
pub struct SyncService {
    time_tracker: Arc<dyn TimeTrackingClient>,
    issue_tracker: Arc<dyn IssueTrackerClient>,
    marker: Arc<dyn LoggedMarker>,
    observer: Arc<dyn SyncObserver>,
    settings: SyncSettings,
}

impl SyncService {
    /// Create a new sync service using the notes-based logged marker
    #[must_use]
    pub fn new(
        time_tracker: Arc<dyn TimeTrackingClient>,
        issue_tracker: Arc<dyn IssueTrackerClient>,
        settings: SyncSettings,
    ) -> Self {
        Self {
            time_tracker,
            issue_tracker,
            marker: Arc::new(NotesMarker),
            observer: Arc::new(NoopObserver),
            settings,
        }
    }

    /// Replace the logged-state convention
    #[must_use]
    pub fn with_marker(mut self, marker: Arc<dyn LoggedMarker>) -> Self {
        self.marker = marker;
        self
    }

    /// Attach a progress observer
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn SyncObserver>) -> Self {
        self.observer = observer;
        self
    }

    #[must_use]
    pub const fn settings(&self) -> &SyncSettings {
        &self.settings
    }

    /// Sync every date in ascending order and report one row per entry
    ///
    /// A date that cannot be fetched stops the run. The report then keeps the
    /// rows of the dates already processed and carries the error in
    /// [`SyncReport::aborted`].
    ///
    /// # Errors
    /// Nothing has been written when an error is returned:
    /// - `SyncError::Connection` when either service cannot be reached or
    ///   rejects the credentials
    /// - `SyncError::UnknownActivities` when a configured activity is missing
    ///   from Redmine; no entry is fetched in that case
    pub async fn sync(&self, dates: &BTreeSet<NaiveDate>) -> Result<SyncReport> {
        self.time_tracker.authenticate().await.map_err(|err| err.into_connection("Harvest"))?;
        let user = self
            .issue_tracker
            .authenticate()
            .await
            .map_err(|err| err.into_connection("Redmine"))?;
        debug!(user_id = user.id, login = %user.login, "authenticated against Redmine");

        let activities = self.load_activities().await?;

        let mut report = SyncReport::default();
        for &date in dates {
            let entries = match self.fetch_pending(date).await {
                Ok(entries) => entries,
                Err(err) => {
                    error!(
                        %date,
                        processed = report.results.len(),
                        error = %err,
                        kind = err.label(),
                        "stopping run"
                    );
                    report.aborted = Some(err);
                    break;
                }
            };
            self.observer.on_entries_fetched(date, entries.len());

            for entry in entries {
                let result = self.sync_entry(date, &entry, &activities, &user).await;
                self.observer.on_entry_processed(&result);
                report.results.push(result);
            }
        }

        info!(
            dates = dates.len(),
            processed = report.results.len(),
            failed = report.failed_count(),
            complete = report.is_complete(),
            dry_run = self.settings.dry_run,
            "sync run finished"
        );

        Ok(report)
    }

    async fn load_activities(&self) -> Result<ActivityMap> {
        let tracker_activities = self
            .issue_tracker
            .list_activities()
            .await
            .map_err(|err| err.into_connection("Redmine"))?;

        let activities = resolve_activities(&self.settings.activities, &tracker_activities)
            .inspect_err(|err| error!(error = %err, "activity compatibility check failed"))?;
        debug!(count = activities.len(), "resolved Redmine activities");
        Ok(activities)
    }

    /// Entries for `date` that belong to the configured client and are not yet logged
    async fn fetch_pending(&self, date: NaiveDate) -> Result<Vec<TimeEntry>> {
        let day = self
            .time_tracker
            .get_day(date.ordinal(), date.year())
            .await
            .map_err(|err| err.into_connection("Harvest"))?;

        let total = day.day_entries.len();
        let pending: Vec<TimeEntry> = day
            .day_entries
            .into_iter()
            .filter(|entry| entry.client == self.settings.client_filter)
            .filter(|entry| !self.marker.is_logged(entry))
            .collect();

        debug!(%date, total, pending = pending.len(), "fetched Harvest day");
        Ok(pending)
    }

    async fn sync_entry(
        &self,
        date: NaiveDate,
        entry: &TimeEntry,
        activities: &ActivityMap,
        user: &RedmineUser,
    ) -> SyncResult {
        let destination = match resolve_destination(&entry.notes, self.settings.default_ticket) {
            Ok(destination) => destination,
            Err(err) => {
                warn!(entry_id = entry.id, %date, error = %err, "cannot resolve ticket");
                return SyncResult::failed(date, entry, None, err.to_string());
            }
        };
        let ticket = destination.ticket;

        let Some((activity, activity_id)) =
            resolve_activity(activities, &entry.task, &self.settings.default_activity)
        else {
            let err = SyncError::InvalidInput(format!(
                "Activity '{}' and default activity '{}' are not configured",
                entry.task, self.settings.default_activity
            ));
            warn!(entry_id = entry.id, ticket, error = %err, "cannot resolve activity");
            return SyncResult::failed(date, entry, Some(ticket), err.to_string());
        };

        let new_entry = NewTimeEntry {
            issue_id: ticket,
            activity_id,
            spent_on: date,
            user_id: user.id,
            hours: round_hours(entry.hours, self.settings.round_time),
            comments: destination.comment,
        };

        if let Err(err) = self.submit(&new_entry).await {
            warn!(entry_id = entry.id, ticket, error = %err, "Redmine rejected time entry");
            return SyncResult::failed(date, entry, Some(ticket), err.to_string());
        }

        if self.settings.dry_run {
            debug!(entry_id = entry.id, ticket, activity, hours = new_entry.hours, "dry run");
            return SyncResult::skipped(date, entry, ticket);
        }

        let updated = self.marker.mark_logged(entry);
        if let Err(err) = self.time_tracker.update(&updated).await {
            error!(
                entry_id = entry.id,
                ticket,
                error = %err,
                "time entry created in Redmine but Harvest entry not marked; duplicate on next run"
            );
            let err = SyncError::Persistence(format!(
                "Failed to save time for {ticket}. Delete manually."
            ));
            return SyncResult::failed(date, entry, Some(ticket), err.to_string());
        }

        info!(entry_id = entry.id, ticket, activity, hours = new_entry.hours, "logged");
        SyncResult::logged(date, entry, ticket)
    }

    /// Look up the issue and, unless dry-running, create the time entry
    async fn submit(&self, new_entry: &NewTimeEntry) -> Result<()> {
        let ticket = new_entry.issue_id;
        self.issue_tracker.get_issue(ticket).await.map_err(|err| match err {
            SyncError::NotFound(_) => SyncError::Submission(format!("Issue #{ticket} not found")),
            other => into_submission(other),
        })?;

        if self.settings.dry_run {
            return Ok(());
        }

        let redmine_id =
            self.issue_tracker.create_time_entry(new_entry).await.map_err(into_submission)?;
        debug!(ticket, redmine_id, "created Redmine time entry");
        Ok(())
    }
}

fn into_submission(err: SyncError) -> SyncError {
    match err {
        SyncError::Submission(_) => err,
        other => SyncError::Submission(other.to_string()),
    }
}
