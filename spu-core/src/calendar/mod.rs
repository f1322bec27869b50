//! Operational calendar: quarters of fixed-length sprints laid out from an
//! anchor date.
//!
//! A calendar spans [`OPERATIONAL_YEARS`] years of four quarters each. Every
//! operational year is followed by a one week buffer (the "13th week") before
//! the next year's first sprint starts.

mod quarter;
mod sprint;

pub use quarter::QuarterPlan;
pub use sprint::{SprintLength, SprintSpec};

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::date::{operational_year, parse_date};
use crate::error::{SpuError, SpuResult};
use crate::naming;

/// Number of operational years laid out by [`build_calendar`].
pub const OPERATIONAL_YEARS: u32 = 9;

/// Quarters in an operational year.
pub const QUARTERS_PER_YEAR: u8 = 4;

/// Quarters touched by a sync run that isn't restricted to a single quarter.
pub const DEFAULT_RUN_QUARTERS: usize = 4;

/// Quarter plans keyed by their 1-based position in the calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Calendar {
    quarters: BTreeMap<u32, QuarterPlan>,
}

impl Calendar {
    fn from_plans(plans: impl IntoIterator<Item = QuarterPlan>) -> Self {
        let quarters = plans
            .into_iter()
            .enumerate()
            .map(|(i, mut plan)| {
                plan.number = i as u32 + 1;
                (plan.number, plan)
            })
            .collect();
        Calendar { quarters }
    }

    pub fn len(&self) -> usize {
        self.quarters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quarters.is_empty()
    }

    pub fn get(&self, number: u32) -> Option<&QuarterPlan> {
        self.quarters.get(&number)
    }

    pub fn quarters(&self) -> impl Iterator<Item = &QuarterPlan> {
        self.quarters.values()
    }

    pub fn sprints(&self) -> impl Iterator<Item = &SprintSpec> {
        self.quarters().flat_map(|q| q.sprints.iter())
    }

    /// Distinct quarter names, in calendar order.
    pub fn quarter_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for plan in self.quarters() {
            if !names.contains(&plan.name.as_str()) {
                names.push(&plan.name);
            }
        }
        names
    }

    /// The first `n` quarters.
    pub fn first_quarters(&self, n: usize) -> Calendar {
        Calendar::from_plans(self.quarters().take(n).cloned())
    }

    /// The first quarter named `name`, renumbered as quarter 1.
    pub fn only_quarter(&self, name: &str) -> Option<Calendar> {
        self.quarters()
            .find(|q| q.name == name)
            .map(|q| Calendar::from_plans([q.clone()]))
    }

    /// Quarters a sync run operates on: the named quarter when one is given,
    /// otherwise the first [`DEFAULT_RUN_QUARTERS`]. An unknown quarter name
    /// gives an empty calendar.
    pub fn run_window(&self, only: Option<&str>) -> Calendar {
        match only {
            Some(name) => self.only_quarter(name).unwrap_or_default(),
            None => self.first_quarters(DEFAULT_RUN_QUARTERS),
        }
    }
}

/// Lay out sprints of `length` starting at `anchor`.
///
/// `anchor` must fall within [`SprintLength::anchor_tolerance`] of `global`.
pub fn build_calendar(
    global: NaiveDate,
    anchor: NaiveDate,
    length: SprintLength,
) -> SpuResult<Calendar> {
    let tolerance = length.anchor_tolerance();
    if anchor < global - tolerance || anchor > global + tolerance {
        return Err(SpuError::InvalidAnchorDate {
            date: anchor,
            global,
            tolerance_days: tolerance.num_days(),
        });
    }

    let step = length.duration();
    let mut clock = anchor;
    let mut plans = Vec::new();

    for _ in 0..OPERATIONAL_YEARS {
        for quarter in 1..=QUARTERS_PER_YEAR {
            let quarter_name = naming::quarter_name(operational_year(clock), quarter);
            let mut sprints = Vec::new();

            for index in 1..=length.sprints_per_quarter() {
                sprints.push(SprintSpec {
                    index,
                    quarter,
                    start: clock,
                    end: clock + step,
                    name: naming::sprint_name(operational_year(clock), quarter, length, index),
                    quarter_name: quarter_name.clone(),
                });
                clock += step;
            }

            plans.push(QuarterPlan {
                number: 0,
                quarter,
                name: quarter_name,
                sprints,
            });
        }

        clock += Duration::weeks(1);
    }

    Ok(Calendar::from_plans(plans))
}

/// [`build_calendar`] over `MM-DD-YY` strings and a length in weeks.
pub fn build_calendar_from_strings(
    global: &str,
    anchor: &str,
    length_weeks: u32,
) -> SpuResult<Calendar> {
    let length = SprintLength::try_from(length_weeks)?;
    build_calendar(parse_date(global)?, parse_date(anchor)?, length)
}
