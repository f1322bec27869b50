//! Core of the sprint planning utility.
//!
//! - `calendar`: operational quarters and sprints laid out from an anchor date
//! - `naming`: board, filter, sprint and quarter names plus JQL fragments
//! - `planner`: decides which boards and filter updates a run needs
//! - `sync`: runs those decisions against a [`tracker::Tracker`]

pub mod calendar;
pub mod config;
pub mod date;
pub mod error;
pub mod naming;
pub mod planner;
pub mod sync;
pub mod tracker;

pub use calendar::{Calendar, QuarterPlan, SprintLength, SprintSpec, build_calendar};
pub use error::{SpuError, SpuResult};
pub use planner::{merge_filter_query, needs_sync};
