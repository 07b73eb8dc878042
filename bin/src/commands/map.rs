//! Map command implementation.
//!
//! Lists currencies known to CoinMarketCap with their ids.

use crate::display::{Format, print_header, print_json};
use anyhow::{Context, Result};
use cmcpro_lib::prelude::*;

/// Fetch the currency map and print it.
pub(crate) async fn currency_map(
    client: &CmcClient,
    status: &str,
    start: u32,
    limit: u32,
    symbol: Option<&str>,
    all: bool,
    format: Format,
) -> Result<()> {
    let currencies = if all {
        client
            .currency_map_all_active()
            .await
            .context("Failed to fetch currency map")?
    } else {
        let status: ListingStatus = status.parse()?;
        client
            .currency_map(status, start, limit, symbol)
            .await
            .context("Failed to fetch currency map")?
    };

    if format == Format::Json {
        return print_json(&currencies);
    }

    if currencies.is_empty() {
        println!("No currencies found.");
        return Ok(());
    }

    print_header(&format!(
        "{:<8} {:<6} {:<12} {:<30} {:<8}",
        "ID", "RANK", "SYMBOL", "NAME", "ACTIVE"
    ));
    for currency in &currencies {
        println!(
            "{:<8} {:<6} {:<12} {:<30} {:<8}",
            currency.id,
            currency.rank.map_or_else(|| "-".to_string(), |rank| rank.to_string()),
            currency.symbol,
            currency.name,
            if currency.is_active() { "yes" } else { "no" }
        );
    }

    println!("\nTotal: {} currencies", currencies.len());
    Ok(())
}
