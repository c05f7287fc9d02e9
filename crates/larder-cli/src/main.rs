//! `larder` -- recipe suggestions from the ingredients you have.
//!
//! Provides the following subcommands:
//!
//! - `larder cook` -- Gather ingredients from text, a photo or a voice note
//!   and ask for a recipe.
//! - `larder normalize` -- Clean up ingredient names without calling the model.
//! - `larder suggest` -- Show common ingredients and nutrition tips.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// Recipe assistant for cooking with what is in the larder.
#[derive(Parser)]
#[command(name = "larder", about = "Recipe assistant for cooking with what you have", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (JSON). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Collect ingredients and generate a recipe.
    Cook(commands::cook::CookArgs),

    /// Normalize ingredient names and print them.
    Normalize(commands::normalize::NormalizeArgs),

    /// Show ingredient suggestions and nutrition tips.
    Suggest,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match cli.command {
        Commands::Cook(args) => {
            let config = commands::load_config(cli.config.as_deref())?;
            commands::cook::run(args, &config).await?;
        }
        Commands::Normalize(args) => commands::normalize::run(args),
        Commands::Suggest => commands::suggest::run(),
    }

    Ok(())
}
