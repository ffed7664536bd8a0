//! Redmine integration
//!
//! REST client authenticated with the `X-Redmine-API-Key` header:
//! - `GET /users/current.json` to verify the key and learn the user id
//! - `GET /enumerations/time_entry_activities.json` for the activity list
//! - `GET /issues/{id}.json` to check an issue exists
//! - `POST /time_entries.json` to create a time entry
//!
//! Validation failures (HTTP 422) carry Redmine's own messages and are
//! classified by [`RedmineError`].

pub mod client;
pub mod errors;
pub mod types;

pub use client::RedmineClient;
pub use errors::{RedmineError, RedmineErrorCategory};
