use anyhow::Result;
use owo_colors::OwoColorize;
use spu_core::config::SpuConfig;

pub fn run(config: &SpuConfig) -> Result<()> {
    let problems = config.validate();

    if !problems.is_empty() {
        for problem in &problems {
            println!("{} {}", "✗".red(), problem.to_string().red());
        }
        anyhow::bail!(
            "Found {} {} in the config",
            problems.len(),
            if problems.len() == 1 { "problem" } else { "problems" }
        );
    }

    println!(
        "{} Q1 starts {}",
        "✓".green(),
        config.operational_q1_start
    );
    if let Some(quarter) = &config.run_for_quarter {
        println!("{} Only syncing {}", "✓".green(), quarter);
    }

    for (name, team) in &config.teams {
        let instance = config.resolve_instance(name, team)?;
        println!(
            "{} {} {}",
            "✓".green(),
            name,
            format!(
                "({} on {}, {}-week sprints from {})",
                team.jira_project,
                instance,
                team.sprint_length.weeks(),
                team.sprint_start_date
            )
            .dimmed()
        );
    }

    Ok(())
}
