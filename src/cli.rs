use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rug-price", version, about = "Rug pricing client")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "rug-pricing.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Rug size shared by every pricing command
#[derive(Args, Debug, Clone)]
pub struct RugArgs {
    /// Item SKU
    #[arg(short, long)]
    pub sku: String,

    /// Width in inches
    #[arg(short, long)]
    pub width: f64,

    /// Length in inches
    #[arg(short, long)]
    pub length: f64,

    /// Binding method (defaults to the configured default_binding_method)
    #[arg(short, long)]
    pub binding_method: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Price one variant and print it as JSON
    Quote {
        #[command(flatten)]
        rug: RugArgs,

        /// Include pristine treatment
        #[arg(long)]
        pristine: bool,

        /// Include padding
        #[arg(long)]
        padding: bool,
    },

    /// Price all four variants of a rug size
    Grid {
        #[command(flatten)]
        rug: RugArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
}
