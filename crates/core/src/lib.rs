//! # harvestmine Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The sync engine and its port interfaces (traits)
//! - Ticket/activity mapping rules and hour rounding
//! - Target date selection
//!
//! ## Architecture Principles
//! - Only depends on `harvestmine-domain`
//! - No HTTP, file or terminal code
//! - All external dependencies via traits

pub mod dates;
pub mod sync;

pub use dates::DateSelection;
pub use sync::{
    IssueTrackerClient, LoggedMarker, NotesMarker, SyncObserver, SyncService, SyncSettings,
    TimeTrackingClient,
};
