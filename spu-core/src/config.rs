//! Configuration for a sync run.
//!
//! The whole file is read once into an immutable [`SpuConfig`] that is passed
//! to every entry point.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{SprintLength, build_calendar};
use crate::date::parse_date;
use crate::error::{SpuError, SpuResult};

/// Configuration at ~/.config/spu/config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpuConfig {
    /// First day of operational Q1, `MM-DD-YY`.
    pub operational_q1_start: String,

    /// Only sync this quarter (`Y20-Q4`) instead of the next four.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_for_quarter: Option<String>,

    /// Instance for teams that don't name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_jira_instance: Option<String>,

    #[serde(default)]
    pub jira: BTreeMap<String, InstanceConfig>,

    #[serde(default)]
    pub teams: BTreeMap<String, TeamConfig>,
}

/// Connection details of one tracker instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceConfig {
    pub server: String,
    #[serde(default = "default_verify")]
    pub verify: bool,
    pub username: String,
    pub password: String,
}

fn default_verify() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamConfig {
    pub jira_project: String,
    pub sprint_length: SprintLength,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira_instance: Option<String>,
    /// First day of the team's first sprint, `MM-DD-YY`.
    pub sprint_start_date: String,
}

impl SpuConfig {
    pub fn config_path() -> SpuResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SpuError::Config("Could not determine config directory".into()))?
            .join("spu");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> SpuResult<Self> {
        if !path.exists() {
            return Err(SpuError::Config(format!(
                "Config file not found at {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> SpuResult<Self> {
        toml::from_str(content).map_err(|e| SpuError::Config(e.to_string()))
    }

    pub fn global_start(&self) -> SpuResult<NaiveDate> {
        parse_date(&self.operational_q1_start)
    }

    /// Name of the tracker instance `team` syncs to, falling back to
    /// `default_jira_instance`.
    pub fn resolve_instance<'a>(&'a self, name: &str, team: &'a TeamConfig) -> SpuResult<&'a str> {
        let instance = team
            .jira_instance
            .as_deref()
            .or(self.default_jira_instance.as_deref())
            .ok_or_else(|| SpuError::MissingInstance(name.to_string()))?;

        if !self.jira.contains_key(instance) {
            return Err(SpuError::UnknownInstance {
                team: name.to_string(),
                instance: instance.to_string(),
            });
        }

        Ok(instance)
    }

    /// Every problem in the config, without stopping at the first.
    pub fn validate(&self) -> Vec<SpuError> {
        let mut problems = Vec::new();

        let global = match self.global_start() {
            Ok(global) => Some(global),
            Err(e) => {
                problems.push(e);
                None
            }
        };

        if let Some(instance) = self
            .default_jira_instance
            .as_ref()
            .filter(|i| !self.jira.contains_key(*i))
        {
            problems.push(SpuError::Config(format!(
                "default_jira_instance '{}' is not configured",
                instance
            )));
        }

        if let Some(quarter) = self
            .run_for_quarter
            .as_ref()
            .filter(|q| !is_quarter_name(q))
        {
            problems.push(SpuError::Config(format!(
                "run_for_quarter '{}' must look like Y20-Q4",
                quarter
            )));
        }

        for (name, team) in &self.teams {
            match (global, parse_date(&team.sprint_start_date)) {
                (Some(global), Ok(anchor)) => {
                    if let Err(e) = build_calendar(global, anchor, team.sprint_length) {
                        problems.push(e);
                    }
                }
                (_, Err(e)) => problems.push(e),
                (None, Ok(_)) => {}
            }
            if let Err(e) = self.resolve_instance(name, team) {
                problems.push(e);
            }
        }

        problems
    }
}

/// `Y<year>-Q<1..4>`
fn is_quarter_name(value: &str) -> bool {
    let Some((year, quarter)) = value.split_once('-') else {
        return false;
    };
    let year_ok = year
        .strip_prefix('Y')
        .is_some_and(|y| !y.is_empty() && y.chars().all(|c| c.is_ascii_digit()));
    let quarter_ok = matches!(quarter, "Q1" | "Q2" | "Q3" | "Q4");
    year_ok && quarter_ok
}
