use anyhow::Result;
use tracing::info;

use crate::cli::RugArgs;
use rug_pricing::ClientConfig;

/// Execute the quote command
pub async fn execute(cfg: &ClientConfig, rug: RugArgs, pristine: bool, padding: bool) -> Result<()> {
    let store = super::build_store(cfg)?;

    info!(sku = %rug.sku, width = rug.width, length = rug.length, "Requesting quote");

    let result = match rug.binding_method.as_deref() {
        Some(binding_method) => {
            store
                .get_price_with_binding(
                    &rug.sku,
                    rug.width,
                    rug.length,
                    binding_method,
                    pristine,
                    padding,
                )
                .await
        }
        None => {
            store
                .get_price(&rug.sku, rug.width, rug.length, pristine, padding)
                .await
        }
    };

    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.is_ok() {
        anyhow::bail!("Pricing request failed");
    }

    Ok(())
}
