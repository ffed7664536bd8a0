//! Harvest → Redmine synchronisation

pub mod activities;
pub mod mapping;
pub mod marker;
pub mod ports;
pub mod service;

pub use activities::{resolve_activities, resolve_activity};
pub use mapping::{resolve_destination, round_hours, Destination};
pub use marker::{LoggedMarker, NotesMarker};
pub use ports::{IssueTrackerClient, TimeTrackingClient};
pub use service::{NoopObserver, SyncObserver, SyncService, SyncSettings};
