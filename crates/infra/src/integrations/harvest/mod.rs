//! Harvest integration
//!
//! Talks to the Harvest v1 timesheet API with HTTP basic authentication:
//! - `GET /account/who_am_i` to verify credentials
//! - `GET /daily/{day_of_year}/{year}` to read a day
//! - `POST /daily/update/{id}` to rewrite an entry's notes

pub mod client;
pub mod types;

pub use client::HarvestClient;
