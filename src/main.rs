mod commands;
mod prompt;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spu")]
#[command(about = "Lay out operational quarters and sprints and create the matching Jira boards")]
struct Cli {
    /// Config file (defaults to ~/.config/spu/config.toml)
    #[arg(long, global = true, env = "SPU_CONFIG")]
    config: Option<PathBuf>,

    /// Log what is created
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create missing global and team boards, filters, issues and sprints
    Sync {
        /// Don't ask before creating boards
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the quarters and sprints of a team (or the global calendar)
    Calendar {
        /// Team from the config
        #[arg(short, long)]
        team: Option<String>,

        /// Show every operational year instead of the sync window
        #[arg(long)]
        all: bool,
    },
    /// Validate the config file
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Sync { yes } => commands::sync::run(&config, yes).await,
        Commands::Calendar { team, all } => commands::calendar::run(&config, team.as_deref(), all),
        Commands::Check => commands::check::run(&config),
    }
}
