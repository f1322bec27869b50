//! Decisions about what a sync run has to create or patch.
//!
//! Nothing here talks to the tracker; callers pass in snapshots of what
//! already exists and act on the answer.

use std::collections::BTreeMap;

use crate::calendar::Calendar;
use crate::naming;

/// Whether the boards for `label` still have to be created.
///
/// Returns `false` as soon as the board of ANY quarter in `calendar` exists.
/// A run that stopped half way is therefore treated as done; the missing
/// boards have to be created by hand.
pub fn needs_sync(
    existing_boards: &BTreeMap<String, u64>,
    calendar: &Calendar,
    label: &str,
    is_global: bool,
) -> bool {
    !calendar.quarter_names().into_iter().any(|quarter| {
        let board = if is_global {
            naming::global_board_name(label, quarter)
        } else {
            naming::team_board_name(quarter, label)
        };
        existing_boards.contains_key(&board)
    })
}

/// Add `project` to a shared filter's JQL.
///
/// Returns `None` when the project is already part of the query. The first
/// project narrows the untouched query with `AND`; later projects widen the
/// already narrowed query with `OR`.
pub fn merge_filter_query(existing_jql: &str, project: &str, initial_jql: &str) -> Option<String> {
    if existing_jql.contains(project) {
        return None;
    }

    let join = if existing_jql == initial_jql { "AND" } else { "OR" };
    Some(format!("project = {} {} {}", project, join, existing_jql))
}
