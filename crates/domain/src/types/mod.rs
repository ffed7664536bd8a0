//! Domain types and models

pub mod entry;
pub mod redmine;
pub mod sync;

pub use entry::{DayEntries, EntryId, TimeEntry};
pub use redmine::{Activity, ActivityId, Issue, NewTimeEntry, RedmineEntryId, RedmineUser, UserId};
pub use sync::{ActivityMap, SyncReport, SyncResult, SyncStatus, TicketId};
