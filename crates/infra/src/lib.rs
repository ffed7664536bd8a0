//! # harvestmine Infrastructure
//!
//! Infrastructure implementations of the core sync ports.
//!
//! This crate contains:
//! - Configuration loading (environment, TOML, JSON)
//! - The shared HTTP client and error conversions
//! - External service integrations (Harvest, Redmine)
//!
//! ## Architecture
//! - Implements traits defined in `harvestmine-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use http::*;
pub use integrations::*;

/// `User-Agent` sent to both services
pub const USER_AGENT: &str = concat!("harvestmine/", env!("CARGO_PKG_VERSION"));
