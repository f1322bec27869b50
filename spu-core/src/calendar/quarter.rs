use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::SprintSpec;

/// The sprints of one operational quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarterPlan {
    /// Position in the calendar, counting from 1 across years.
    pub number: u32,
    /// Operational quarter, 1 to 4.
    pub quarter: u8,
    pub name: String,
    pub sprints: Vec<SprintSpec>,
}

impl QuarterPlan {
    pub fn start(&self) -> Option<NaiveDate> {
        self.sprints.first().map(|s| s.start)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.sprints.last().map(|s| s.end)
    }
}
