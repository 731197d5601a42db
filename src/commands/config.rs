use anyhow::Result;
use tracing::info;

use rug_pricing::ClientConfig;

/// Execute the config show command
pub fn show(cfg: &ClientConfig) -> Result<()> {
    info!("Displaying effective configuration");

    println!("Current Configuration:");
    println!();
    println!("{}", toml::to_string_pretty(cfg)?);

    Ok(())
}
