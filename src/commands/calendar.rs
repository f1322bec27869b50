use anyhow::Result;
use owo_colors::OwoColorize;
use spu_core::config::SpuConfig;
use spu_core::date::parse_date;
use spu_core::{Calendar, SprintLength, build_calendar};

use crate::render::Render;

pub fn run(config: &SpuConfig, team: Option<&str>, all: bool) -> Result<()> {
    let calendar = team_calendar(config, team)?;
    let shown = if all {
        calendar
    } else {
        calendar.run_window(config.run_for_quarter.as_deref())
    };

    if shown.is_empty() {
        println!("{}", "No quarters to show".dimmed());
        return Ok(());
    }

    let plans: Vec<String> = shown.quarters().map(|plan| plan.render()).collect();
    println!("{}", plans.join("\n\n"));

    Ok(())
}

/// The calendar of `team`, or the two-week global calendar when no team is given.
fn team_calendar(config: &SpuConfig, team: Option<&str>) -> Result<Calendar> {
    let global = config.global_start()?;

    let Some(name) = team else {
        return Ok(build_calendar(global, global, SprintLength::Two)?);
    };

    let Some(team) = config.teams.get(name) else {
        let available: Vec<&str> = config.teams.keys().map(String::as_str).collect();
        anyhow::bail!(
            "Team '{}' not found. Available: {}",
            name,
            available.join(", ")
        );
    };

    let anchor = parse_date(&team.sprint_start_date)?;
    Ok(build_calendar(global, anchor, team.sprint_length)?)
}
