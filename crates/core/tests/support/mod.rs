//! Shared test helpers for `harvestmine-core` integration tests.
//!
//! In-memory fakes for both ports. The Harvest fake applies updates to its
//! stored days so repeated runs observe earlier writes.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use harvestmine_core::{IssueTrackerClient, SyncService, SyncSettings, TimeTrackingClient};
use harvestmine_domain::{
    Activity, DayEntries, Issue, NewTimeEntry, RedmineEntryId, RedmineUser, Result, SyncError,
    TicketId, TimeEntry,
};

pub const CLIENT: &str = "Yellow";
pub const DEFAULT_TICKET: TicketId = 37080;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn entry(id: u64, task: &str, notes: &str, hours: f64) -> TimeEntry {
    TimeEntry::new(id, CLIENT, task, notes, hours)
}

pub fn settings() -> SyncSettings {
    SyncSettings {
        client_filter: CLIENT.to_string(),
        activities: vec!["Development".to_string(), "Meeting".to_string()],
        default_ticket: DEFAULT_TICKET,
        default_activity: "Development".to_string(),
        round_time: None,
        dry_run: false,
    }
}

/// Fake Harvest keyed by `(day_of_year, year)`.
#[derive(Default)]
pub struct FakeHarvest {
    days: Mutex<BTreeMap<(u32, i32), Vec<TimeEntry>>>,
    updates: Mutex<Vec<TimeEntry>>,
    fetches: AtomicUsize,
    unreachable_days: BTreeSet<(u32, i32)>,
    fail_auth: bool,
    fail_updates: bool,
}

impl FakeHarvest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(self, day: NaiveDate, entries: Vec<TimeEntry>) -> Self {
        self.days.lock().unwrap().insert((day.ordinal(), day.year()), entries);
        self
    }

    /// Fetching `day` fails with a timeout
    pub fn unreachable_on(mut self, day: NaiveDate) -> Self {
        self.unreachable_days.insert((day.ordinal(), day.year()));
        self
    }

    pub fn failing_auth(mut self) -> Self {
        self.fail_auth = true;
        self
    }

    pub fn failing_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    pub fn updates(&self) -> Vec<TimeEntry> {
        self.updates.lock().unwrap().clone()
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn stored(&self, day: NaiveDate) -> Vec<TimeEntry> {
        self.days.lock().unwrap().get(&(day.ordinal(), day.year())).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl TimeTrackingClient for FakeHarvest {
    async fn authenticate(&self) -> Result<()> {
        if self.fail_auth {
            return Err(SyncError::Auth("HTTP 401 Unauthorized".into()));
        }
        Ok(())
    }

    async fn get_day(&self, day_of_year: u32, year: i32) -> Result<DayEntries> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.unreachable_days.contains(&(day_of_year, year)) {
            return Err(SyncError::Network("HTTP request timed out".into()));
        }
        let day_entries =
            self.days.lock().unwrap().get(&(day_of_year, year)).cloned().unwrap_or_default();
        Ok(DayEntries { for_day: None, day_entries })
    }

    async fn update(&self, entry: &TimeEntry) -> Result<()> {
        if self.fail_updates {
            return Err(SyncError::Network("HTTP connection failure".into()));
        }
        self.updates.lock().unwrap().push(entry.clone());
        for entries in self.days.lock().unwrap().values_mut() {
            if let Some(stored) = entries.iter_mut().find(|stored| stored.id == entry.id) {
                *stored = entry.clone();
            }
        }
        Ok(())
    }
}

/// Fake Redmine recording created entries.
pub struct FakeRedmine {
    activities: Vec<Activity>,
    issues: BTreeSet<TicketId>,
    created: Mutex<Vec<NewTimeEntry>>,
    issue_lookups: AtomicUsize,
    reject_with: Option<String>,
}

impl Default for FakeRedmine {
    fn default() -> Self {
        Self {
            activities: vec![
                Activity::new(9, "Development"),
                Activity::new(14, "Meeting"),
                Activity::new(21, "Other"),
            ],
            issues: BTreeSet::from([DEFAULT_TICKET, 4521]),
            created: Mutex::new(Vec::new()),
            issue_lookups: AtomicUsize::new(0),
            reject_with: None,
        }
    }
}

impl FakeRedmine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activities(mut self, activities: Vec<Activity>) -> Self {
        self.activities = activities;
        self
    }

    pub fn rejecting(mut self, message: &str) -> Self {
        self.reject_with = Some(message.to_string());
        self
    }

    pub fn created(&self) -> Vec<NewTimeEntry> {
        self.created.lock().unwrap().clone()
    }

    pub fn issue_lookups(&self) -> usize {
        self.issue_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IssueTrackerClient for FakeRedmine {
    async fn authenticate(&self) -> Result<RedmineUser> {
        Ok(RedmineUser { id: 5, login: "jdoe".into() })
    }

    async fn list_activities(&self) -> Result<Vec<Activity>> {
        Ok(self.activities.clone())
    }

    async fn get_issue(&self, ticket: TicketId) -> Result<Issue> {
        self.issue_lookups.fetch_add(1, Ordering::SeqCst);
        if self.issues.contains(&ticket) {
            Ok(Issue { id: ticket, subject: format!("Issue {ticket}") })
        } else {
            Err(SyncError::NotFound("HTTP 404 Not Found".into()))
        }
    }

    async fn create_time_entry(&self, entry: &NewTimeEntry) -> Result<RedmineEntryId> {
        if let Some(message) = &self.reject_with {
            return Err(SyncError::Submission(message.clone()));
        }
        let mut created = self.created.lock().unwrap();
        created.push(entry.clone());
        Ok(created.len() as RedmineEntryId)
    }
}

/// Service wired to the given fakes.
pub fn service(
    harvest: &Arc<FakeHarvest>,
    redmine: &Arc<FakeRedmine>,
    settings: SyncSettings,
) -> SyncService {
    SyncService::new(harvest.clone(), redmine.clone(), settings)
}
