use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::cli::RugArgs;
use rug_pricing::{ClientConfig, PriceResult, PriceVariantSet};

/// Execute the grid command
pub async fn execute(cfg: &ClientConfig, rug: RugArgs, json: bool) -> Result<()> {
    let store = super::build_store(cfg)?;
    let binding_method = rug
        .binding_method
        .unwrap_or_else(|| store.default_binding_method().to_string());

    let set = store
        .fetch_grouped_prices(&rug.sku, rug.width, rug.length, &binding_method)
        .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&set)?);
        return Ok(());
    }

    println!(
        "Prices for {} ({} x {} in, {}):",
        rug.sku.bold(),
        rug.width,
        rug.length,
        binding_method
    );
    println!("{}", render_table(&set));

    let failed = set.iter().filter(|(_, result)| !result.is_ok()).count();
    if failed > 0 {
        println!("{}", format!("✗ {} of 4 variants failed", failed).red());
    } else {
        println!("{}", "✓ All variants priced".green());
    }

    Ok(())
}

fn render_table(set: &PriceVariantSet) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("VARIANT").fg(Color::Cyan),
        Cell::new("TOTAL").fg(Color::Cyan),
        Cell::new("PADDING").fg(Color::Cyan),
        Cell::new("PRISTINE").fg(Color::Cyan),
        Cell::new("ERROR").fg(Color::Cyan),
    ]);

    for (variant, result) in set.iter() {
        let row = match result {
            PriceResult::Success(quote) => vec![
                Cell::new(variant.key()),
                Cell::new(format!("${:.2}", quote.total_charge)),
                Cell::new(format!("${:.2}", quote.total_padding_charge)),
                Cell::new(format!("${:.2}", quote.total_pristine_charge)),
                Cell::new(""),
            ],
            PriceResult::Failure { error_message } => vec![
                Cell::new(variant.key()),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new(error_message).fg(Color::Red),
            ],
        };
        table.add_row(row);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use rug_pricing::PriceQuote;

    #[test]
    fn test_render_table_lists_every_variant() {
        let ok = PriceResult::Success(PriceQuote {
            total_charge: 135.0,
            total_padding_charge: 15.0,
            total_pristine_charge: 0.0,
        });
        let set = PriceVariantSet::new(
            ok.clone(),
            ok.clone(),
            PriceResult::failure("HTTP error! Status: 500"),
            ok,
        );

        let rendered = render_table(&set).to_string();
        for key in ["price", "priceWithPadding", "priceWithPristine", "priceWithBoth"] {
            assert!(rendered.contains(key));
        }
        assert!(rendered.contains("$135.00"));
        assert!(rendered.contains("Status: 500"));
    }
}
