//! Jira REST endpoints used by a sync run.

use std::collections::BTreeMap;

use anyhow::Result;
use spu_core::tracker::{Board, Filter, Issue, Sprint};

use crate::client::JiraClient;
use crate::types::{
    BoardLocation, BoardPage, BoardValue, CreateBoard, CreateFilter, CreateIssue, CreateSprint,
    FilterValue, IssueFields, IssueType, IssueValue, ProjectKey, SprintValue, UpdateFilter,
};

const BOARDS: &str = "rest/agile/1.0/board";
const SPRINTS: &str = "rest/agile/1.0/sprint";
const FILTERS: &str = "rest/api/2/filter";
const FAVOURITE_FILTERS: &str = "rest/api/2/filter/favourite";
const ISSUES: &str = "rest/api/2/issue";

/// Every board visible to the user, following pages until `isLast`.
pub async fn list_boards(client: &JiraClient) -> Result<BTreeMap<String, u64>> {
    let mut boards = BTreeMap::new();
    let mut start_at = 0usize;

    loop {
        let page: BoardPage = client
            .get(BOARDS, &[("startAt", start_at.to_string())])
            .await?;

        let fetched = page.values.len();
        for board in page.values {
            boards.insert(board.name, board.id);
        }

        // An empty page that is not marked last would loop forever.
        if page.is_last || fetched == 0 {
            break;
        }
        start_at += fetched;
    }

    tracing::debug!("Found {} boards", boards.len());
    Ok(boards)
}

pub async fn list_favorite_filters(client: &JiraClient) -> Result<Vec<Filter>> {
    let filters: Vec<FilterValue> = client.get(FAVOURITE_FILTERS, &[]).await?;

    Ok(filters
        .into_iter()
        .map(|f| Filter {
            id: f.id,
            name: f.name,
            jql: f.jql,
        })
        .collect())
}

pub async fn create_filter(
    client: &JiraClient,
    name: &str,
    jql: &str,
    favorite: bool,
) -> Result<Filter> {
    let body = CreateFilter {
        name,
        jql,
        favourite: favorite,
    };
    let created: FilterValue = client.post(FILTERS, &body).await?;

    Ok(Filter {
        id: created.id,
        name: created.name,
        jql: if created.jql.is_empty() {
            jql.to_string()
        } else {
            created.jql
        },
    })
}

pub async fn update_filter(client: &JiraClient, filter_id: u64, name: &str, jql: &str) -> Result<()> {
    let path = format!("{}/{}", FILTERS, filter_id);
    client.put(&path, &UpdateFilter { name, jql }).await
}

pub async fn create_board(
    client: &JiraClient,
    name: &str,
    project: Option<&str>,
    filter_id: u64,
) -> Result<Board> {
    let body = CreateBoard {
        name,
        kind: "scrum",
        filter_id,
        location: project.map(|key| BoardLocation {
            kind: "project",
            project_key_or_id: key,
        }),
    };
    let created: BoardValue = client.post(BOARDS, &body).await?;

    Ok(Board {
        id: created.id,
        name: created.name,
    })
}

pub async fn create_sprint(client: &JiraClient, board_id: u64, name: &str) -> Result<Sprint> {
    let body = CreateSprint {
        name,
        origin_board_id: board_id,
    };
    let created: SprintValue = client.post(SPRINTS, &body).await?;

    Ok(Sprint {
        id: created.id,
        name: created.name,
    })
}

pub async fn create_issue(
    client: &JiraClient,
    project: &str,
    summary: &str,
    labels: &[String],
    issue_type: &str,
) -> Result<Issue> {
    let body = CreateIssue {
        fields: IssueFields {
            project: ProjectKey { key: project },
            summary,
            labels,
            issue_type: IssueType { name: issue_type },
        },
    };
    let created: IssueValue = client.post(ISSUES, &body).await?;

    Ok(Issue {
        id: created.id,
        key: created.key,
    })
}
