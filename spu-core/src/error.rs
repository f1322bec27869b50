//! Error types for the sprint planning utility.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while planning or syncing sprints.
#[derive(Error, Debug)]
pub enum SpuError {
    #[error(
        "Invalid sprint start date {date}: must be within {tolerance_days} days of the Q1 start date {global}"
    )]
    InvalidAnchorDate {
        date: NaiveDate,
        global: NaiveDate,
        tolerance_days: i64,
    },

    #[error("No jira_instance for team '{0}' and there is no default in the config")]
    MissingInstance(String),

    #[error("Team '{team}' uses jira instance '{instance}' which is not configured")]
    UnknownInstance { team: String, instance: String },

    #[error("Unsupported sprint length: {0} weeks (expected 2 or 3)")]
    UnsupportedSprintLength(u32),

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tracker error: {0}")]
    Tracker(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for planning operations.
pub type SpuResult<T> = Result<T, SpuError>;
