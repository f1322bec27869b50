pub mod calendar;
pub mod check;
pub mod sync;

use std::path::Path;

use anyhow::{Context, Result};
use spu_core::config::SpuConfig;

/// Load `path`, or the default config file when none is given.
pub fn load_config(path: Option<&Path>) -> Result<SpuConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => SpuConfig::config_path()?,
    };

    if !path.exists() {
        anyhow::bail!(
            "No config found at {}.\n\n\
            Create one with your Jira instances and teams, e.g.:\n  \
            operational_q1_start = \"01-01-19\"\n  \
            default_jira_instance = \"example\"\n\n  \
            [jira.example]\n  \
            server = \"https://jira.example.com\"\n  \
            username = \"bot\"\n  \
            password = \"secret\"\n\n  \
            [teams.factory]\n  \
            jira_project = \"FACTORY\"\n  \
            sprint_length = 2\n  \
            sprint_start_date = \"01-07-19\"",
            path.display()
        );
    }

    SpuConfig::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))
}
