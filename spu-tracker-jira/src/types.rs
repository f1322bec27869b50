//! Request and response bodies of the Jira REST API.

use serde::{Deserialize, Deserializer, Serialize};

/// Jira sends ids as strings on the core API and as numbers on the agile API.
pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u64),
        Text(String),
    }

    match Id::deserialize(deserializer)? {
        Id::Number(n) => Ok(n),
        Id::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

// =============================================================================
// Boards
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPage {
    #[serde(default)]
    pub is_last: bool,
    #[serde(default)]
    pub values: Vec<BoardValue>,
}

#[derive(Debug, Deserialize)]
pub struct BoardValue {
    #[serde(deserialize_with = "id")]
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoard<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub filter_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<BoardLocation<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardLocation<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub project_key_or_id: &'a str,
}

// =============================================================================
// Filters
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct FilterValue {
    #[serde(deserialize_with = "id")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub jql: String,
}

#[derive(Debug, Serialize)]
pub struct CreateFilter<'a> {
    pub name: &'a str,
    pub jql: &'a str,
    pub favourite: bool,
}

#[derive(Debug, Serialize)]
pub struct UpdateFilter<'a> {
    pub name: &'a str,
    pub jql: &'a str,
}

// =============================================================================
// Sprints and issues
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSprint<'a> {
    pub name: &'a str,
    pub origin_board_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct SprintValue {
    #[serde(deserialize_with = "id")]
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CreateIssue<'a> {
    pub fields: IssueFields<'a>,
}

#[derive(Debug, Serialize)]
pub struct IssueFields<'a> {
    pub project: ProjectKey<'a>,
    pub summary: &'a str,
    pub labels: &'a [String],
    #[serde(rename = "issuetype")]
    pub issue_type: IssueType<'a>,
}

#[derive(Debug, Serialize)]
pub struct ProjectKey<'a> {
    pub key: &'a str,
}

#[derive(Debug, Serialize)]
pub struct IssueType<'a> {
    pub name: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct IssueValue {
    pub id: String,
    pub key: String,
}
