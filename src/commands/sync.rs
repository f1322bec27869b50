use std::collections::BTreeMap;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use spu_core::config::SpuConfig;
use spu_core::sync::{AssumeYes, Confirm, SyncReport, SyncRun};
use spu_tracker_jira::JiraClient;

use crate::prompt::TerminalConfirm;
use crate::render::Render;
use crate::utils::tui;

pub async fn run(config: &SpuConfig, yes: bool) -> Result<()> {
    if config.jira.is_empty() {
        anyhow::bail!("No Jira instances configured. Add a [jira.<name>] table to the config.");
    }

    let mut trackers = BTreeMap::new();
    for (name, instance) in &config.jira {
        let client = JiraClient::new(instance)
            .with_context(|| format!("Failed to set up Jira instance '{}'", name))?;
        tracing::info!(instance = %name, server = %client.server(), "using Jira instance");
        trackers.insert(name.clone(), client);
    }

    let report = if yes {
        sync_with(config, &trackers, &AssumeYes).await?
    } else {
        sync_with(config, &trackers, &TerminalConfirm).await?
    };

    if !report.globals.is_empty() || !report.teams.is_empty() {
        println!("{}", report.render());
    }

    if report.aborted {
        println!("\n{}", "Exiting".dimmed());
        return Ok(());
    }

    let totals = report.totals();
    if totals.boards_created > 0 {
        println!("\nCreated: {}", totals.render());
    }

    let failed = report.failed_teams();
    if failed > 0 {
        anyhow::bail!(
            "{} of {} teams failed to sync",
            failed,
            report.teams.len()
        );
    }

    Ok(())
}

async fn sync_with<C: Confirm>(
    config: &SpuConfig,
    trackers: &BTreeMap<String, JiraClient>,
    confirm: &C,
) -> Result<SyncReport> {
    let spinner = tui::create_spinner(format!(
        "Reading boards from {} Jira {}",
        trackers.len(),
        if trackers.len() == 1 { "instance" } else { "instances" }
    ));
    let prepared = SyncRun::prepare(config, trackers, confirm).await;
    spinner.finish_and_clear();

    let sync = prepared.context("Failed to read existing boards")?;
    Ok(sync.run().await?)
}
