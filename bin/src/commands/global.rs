//! Global metrics command implementation.

use crate::display::{Format, human_amount, print_json, split_list};
use anyhow::{Context, Result};
use cmcpro_lib::prelude::*;

/// Fetch and display global market metrics.
pub(crate) async fn global_metrics(
    client: &CmcClient,
    convert: &str,
    by_id: bool,
    format: Format,
) -> Result<()> {
    let metrics = if by_id {
        client.global_quotes_latest_by_id(convert).await
    } else {
        client.global_quotes_latest_by_symbol(convert).await
    }
    .context("Failed to fetch global metrics")?;

    if format == Format::Json {
        return print_json(&metrics);
    }

    println!("Global Market Metrics");
    println!("{}", "=".repeat(40));
    println!("BTC dominance:       {:.2}%", metrics.btc_dominance);
    println!("ETH dominance:       {:.2}%", metrics.eth_dominance);
    println!(
        "Cryptocurrencies:    {} active / {} total",
        metrics.active_cryptocurrencies, metrics.total_cryptocurrencies
    );
    println!(
        "Exchanges:           {} active / {} total",
        metrics.active_exchanges, metrics.total_exchanges
    );
    println!("Market pairs:        {}", metrics.active_market_pairs);
    if !metrics.last_updated.is_zero() {
        println!("Last updated:        {}", metrics.last_updated);
    }

    for key in split_list(convert) {
        let Some(quote) = metrics.quote.get(key) else {
            continue;
        };
        println!("\nIn {key}:");
        println!("  Total market cap:  {}", human_amount(quote.total_market_cap));
        println!("  Volume 24h:        {}", human_amount(quote.total_volume_24h));
        println!("  Altcoin cap:       {}", human_amount(quote.altcoin_market_cap));
        println!("  Altcoin vol 24h:   {}", human_amount(quote.altcoin_volume_24h));
    }

    Ok(())
}
