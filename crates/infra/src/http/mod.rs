//! Shared HTTP plumbing for the service clients

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
