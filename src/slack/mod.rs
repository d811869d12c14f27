//! Slack directory lookup.

pub mod client;
pub mod config;

pub use client::{DirectoryLookup, LookupResponse, SlackClient};
pub use config::SlackConfig;
