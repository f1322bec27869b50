//! Colored terminal rendering of calendars and sync results.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use spu_core::sync::{GlobalOutcome, GlobalReport, SyncReport, TeamOutcome, TeamReport, TeamStats};
use spu_core::{QuarterPlan, SprintSpec};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

fn date(d: NaiveDate) -> String {
    d.format("%a %b %d %Y").to_string()
}

impl Render for SprintSpec {
    fn render(&self) -> String {
        format!(
            "{} {}",
            self.name,
            format!("{} - {}", date(self.start), date(self.end)).dimmed()
        )
    }
}

impl Render for QuarterPlan {
    fn render(&self) -> String {
        let mut lines = vec![format!("📅 {}", self.name.bold())];
        for sprint in &self.sprints {
            lines.push(format!("   {}", sprint.render()));
        }
        lines.join("\n")
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

impl Render for TeamStats {
    fn render(&self) -> String {
        let mut parts = Vec::new();
        for (count, word) in [
            (self.boards_created, "board"),
            (self.filters_created, "filter"),
            (self.issues_created, "issue"),
            (self.sprints_created, "sprint"),
        ] {
            if count > 0 {
                parts.push(format!("{} {}", count, pluralize(word, count)));
            }
        }
        if self.filters_updated > 0 {
            parts.push(format!(
                "{} global {} updated",
                self.filters_updated,
                pluralize("filter", self.filters_updated)
            ));
        }

        if parts.is_empty() {
            "nothing created".to_string()
        } else {
            parts.join(", ")
        }
    }
}

impl Render for TeamReport {
    fn render(&self) -> String {
        let status = match &self.outcome {
            TeamOutcome::Synced(stats) => format!("{} {}", "+".green(), stats.render().green()),
            TeamOutcome::UpToDate => "Boards already exist".dimmed().to_string(),
            TeamOutcome::NothingScheduled => "Quarter not in calendar".yellow().to_string(),
            TeamOutcome::Failed(e) => e.red().to_string(),
        };
        format!("👥 {}\n   {}", self.team, status)
    }
}

impl Render for GlobalReport {
    fn render(&self) -> String {
        let status = match &self.outcome {
            GlobalOutcome::Created { boards } => format!(
                "{} {}",
                "+".green(),
                format!("{} {} created", boards, pluralize("board", *boards)).green()
            ),
            GlobalOutcome::Existing { filters } => format!(
                "Boards already exist ({} {})",
                filters,
                pluralize("filter", *filters)
            )
            .dimmed()
            .to_string(),
            GlobalOutcome::Failed(e) => e.red().to_string(),
        };
        format!("🌐 {} {}\n   {}", self.kind, self.instance, status)
    }
}

impl Render for SyncReport {
    fn render(&self) -> String {
        let mut lines = Vec::new();
        for global in &self.globals {
            lines.push(global.render());
        }
        for team in &self.teams {
            lines.push(team.render());
        }
        lines.join("\n\n")
    }
}
