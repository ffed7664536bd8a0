//! External service integrations

pub mod harvest;
pub mod redmine;

pub use harvest::HarvestClient;
pub use redmine::RedmineClient;
