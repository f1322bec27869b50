use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SpuError;

/// Supported sprint cadences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SprintLength {
    Two,
    Three,
}

impl SprintLength {
    pub fn weeks(self) -> u32 {
        match self {
            SprintLength::Two => 2,
            SprintLength::Three => 3,
        }
    }

    pub fn duration(self) -> Duration {
        Duration::weeks(i64::from(self.weeks()))
    }

    /// Sprints grouped into one operational quarter.
    ///
    /// Both cadences fill 12 weeks, leaving the 13th week of every
    /// operational year as a buffer.
    pub fn sprints_per_quarter(self) -> u32 {
        match self {
            SprintLength::Two => 6,
            SprintLength::Three => 4,
        }
    }

    /// How far a team's first sprint may start from the global Q1 start date.
    pub fn anchor_tolerance(self) -> Duration {
        match self {
            SprintLength::Two => Duration::weeks(1),
            SprintLength::Three => Duration::days(10),
        }
    }
}

impl TryFrom<u32> for SprintLength {
    type Error = SpuError;

    fn try_from(weeks: u32) -> Result<Self, Self::Error> {
        match weeks {
            2 => Ok(SprintLength::Two),
            3 => Ok(SprintLength::Three),
            other => Err(SpuError::UnsupportedSprintLength(other)),
        }
    }
}

impl From<SprintLength> for u32 {
    fn from(length: SprintLength) -> Self {
        length.weeks()
    }
}

impl fmt::Display for SprintLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} weeks", self.weeks())
    }
}

/// One scheduled sprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SprintSpec {
    /// 1-based position within the quarter.
    pub index: u32,
    /// Operational quarter, 1 to 4.
    pub quarter: u8,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub name: String,
    pub quarter_name: String,
}
