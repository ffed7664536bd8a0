//! # harvestmine Domain
//!
//! Business domain types for the Harvest → Redmine synchronizer.
//!
//! This crate contains:
//! - Harvest day entries and Redmine resources (activities, issues, users)
//! - Per-entry sync outcomes and the activity map
//! - Configuration structures
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other harvestmine crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
