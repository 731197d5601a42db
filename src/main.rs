use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use rug_pricing::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let cfg = config::load_config(Some(args.config.as_path()))?;
    init_tracing(&cfg.log_level, &cfg.log_format);

    match args.command {
        cli::Commands::Quote {
            rug,
            pristine,
            padding,
        } => {
            commands::quote::execute(&cfg, rug, pristine, padding).await?;
        }
        cli::Commands::Grid { rug, json } => {
            commands::grid::execute(&cfg, rug, json).await?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
        },
    }

    Ok(())
}
