//! Logged-state convention for Harvest entries.
//!
//! Harvest has no "synced" flag, so the state lives in the free-text notes.
//! The engine only talks to [`LoggedMarker`], which keeps the convention
//! swappable for a structured flag.

use harvestmine_domain::constants::LOGGED_MARKER;
use harvestmine_domain::TimeEntry;

/// Reads and writes the "already synced" state of an entry
pub trait LoggedMarker: Send + Sync {
    /// Whether the entry was synced by a previous run
    fn is_logged(&self, entry: &TimeEntry) -> bool;

    /// Copy of the entry carrying the logged state
    fn mark_logged(&self, entry: &TimeEntry) -> TimeEntry;
}

/// Marker stored as a `Logged` suffix in the notes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotesMarker;

impl LoggedMarker for NotesMarker {
    fn is_logged(&self, entry: &TimeEntry) -> bool {
        entry.notes.to_lowercase().contains(&LOGGED_MARKER.to_lowercase())
    }

    fn mark_logged(&self, entry: &TimeEntry) -> TimeEntry {
        let mut updated = entry.clone();
        updated.notes = if entry.notes.is_empty() {
            LOGGED_MARKER.to_string()
        } else {
            format!("{} {LOGGED_MARKER}", entry.notes)
        };
        updated
    }
}
