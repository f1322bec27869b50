//! Jira REST implementation of [`spu_core::tracker::Tracker`].
//!
//! Authenticates with basic auth and talks to the core (`rest/api/2`) and
//! agile (`rest/agile/1.0`) APIs.

mod api;
mod client;
mod types;

pub use client::JiraClient;
