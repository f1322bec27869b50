//! The tracker operations a sync run needs.
//!
//! Implemented over HTTP by `spu-tracker-jira`; tests use an in-memory fake.

use std::collections::BTreeMap;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::SpuResult;

/// A saved search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub id: u64,
    pub name: String,
    pub jql: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub key: String,
}

pub trait Tracker {
    /// Every board visible to the user, name to id.
    fn list_boards(&self) -> impl Future<Output = SpuResult<BTreeMap<String, u64>>> + Send;

    fn list_favorite_filters(&self) -> impl Future<Output = SpuResult<Vec<Filter>>> + Send;

    fn create_filter(
        &self,
        name: &str,
        jql: &str,
        favorite: bool,
    ) -> impl Future<Output = SpuResult<Filter>> + Send;

    fn update_filter(
        &self,
        filter_id: u64,
        name: &str,
        jql: &str,
    ) -> impl Future<Output = SpuResult<()>> + Send;

    /// Create a scrum board over `filter_id`, placed in `project` when given.
    fn create_board(
        &self,
        name: &str,
        project: Option<&str>,
        filter_id: u64,
    ) -> impl Future<Output = SpuResult<Board>> + Send;

    fn create_sprint(&self, board_id: u64, name: &str)
    -> impl Future<Output = SpuResult<Sprint>> + Send;

    fn create_issue(
        &self,
        project: &str,
        summary: &str,
        labels: &[String],
        issue_type: &str,
    ) -> impl Future<Output = SpuResult<Issue>> + Send;
}
