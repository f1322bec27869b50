//! Display names and JQL fragments.
//!
//! These strings are matched against live tracker data (board names, filter
//! names, stored JQL), so every place that creates a board or filter and every
//! place that looks one up goes through the functions below.

use std::fmt;

use crate::calendar::SprintLength;

/// Title prefix of the shared per-instance board.
pub const GLOBAL_BOARD: &str = "GLOBAL_BOARD";

/// Title prefix of the shared per-instance board listing at-risk issues.
pub const GLOBAL_BAD_BOARD: &str = "GLOBAL_BAD_BOARD";

/// Clause narrowing a bad board to overdue, unestimated-remaining or open issues.
pub const AT_RISK_JQL: &str =
    "(remainingEstimate > 0 OR duedate < endOfDay() OR status not in (Closed, Resolved))";

/// The two kinds of shared board kept on every tracker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalKind {
    Board,
    BadBoard,
}

impl GlobalKind {
    pub const ALL: [GlobalKind; 2] = [GlobalKind::Board, GlobalKind::BadBoard];

    pub fn title(self) -> &'static str {
        match self {
            GlobalKind::Board => GLOBAL_BOARD,
            GlobalKind::BadBoard => GLOBAL_BAD_BOARD,
        }
    }
}

impl fmt::Display for GlobalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// `Y19-Q1-L2-S1`
pub fn sprint_name(year: i32, quarter: u8, length: SprintLength, index: u32) -> String {
    format!("Y{:02}-Q{}-L{}-S{}", year, quarter, length.weeks(), index)
}

/// `Y19-Q1`
pub fn quarter_name(year: i32, quarter: u8) -> String {
    format!("Y{:02}-Q{}", year, quarter)
}

/// Label identifying the global board of `kind` on a tracker instance.
pub fn global_label(kind: GlobalKind, instance: &str) -> String {
    format!("{} {}", kind.title(), instance)
}

pub fn team_board_name(quarter: &str, team: &str) -> String {
    format!("{} - {} Board", quarter, team)
}

pub fn global_board_name(label: &str, quarter: &str) -> String {
    format!("{} {} Board", label, quarter)
}

pub fn team_filter_name(quarter: &str, project: &str) -> String {
    format!("{} - {} filter", quarter, project)
}

pub fn team_filter_jql(quarter: &str, project: &str) -> String {
    format!(
        "labels = '{}' AND project = {} ORDER BY Rank ASC",
        quarter, project
    )
}

pub fn global_filter_name(label: &str, quarter: &str) -> String {
    format!("{} {} filter", label, quarter)
}

/// JQL a global filter is created with, before any project has been merged in.
pub fn initial_global_jql(quarter: &str, kind: GlobalKind) -> String {
    let base = format!("labels = '{}' ORDER BY Rank ASC", quarter);
    match kind {
        GlobalKind::Board => base,
        GlobalKind::BadBoard => format!("{} AND {}", AT_RISK_JQL, base),
    }
}

pub fn quarter_issue_summary(number: u32) -> String {
    format!("Quarter {} Issue", number)
}
