//! Listings command implementation.

use crate::display::{Format, human_amount, price, print_header, print_json, split_list};
use anyhow::{Context, Result};
use cmcpro_lib::prelude::*;

/// Fetch the latest listings and print them ranked.
pub(crate) async fn listings(
    client: &CmcClient,
    start: u32,
    limit: u32,
    convert: &str,
    by_id: bool,
    all: bool,
    format: Format,
) -> Result<()> {
    let mut listings = if all {
        client.listings_latest_all().await
    } else if by_id {
        client.listings_latest_by_id(start, limit, convert).await
    } else {
        client.listings_latest_by_symbol(start, limit, convert).await
    }
    .context("Failed to fetch listings")?;

    if format == Format::Json {
        return print_json(&listings);
    }

    if listings.is_empty() {
        println!("No listings found.");
        return Ok(());
    }

    listings.sort_by_key(|listing| listing.cmc_rank);
    let quote_key = if all {
        "USD"
    } else {
        split_list(convert).first().copied().unwrap_or("USD")
    };

    print_header(&format!(
        "{:<6} {:<10} {:<24} {:>16} {:>12} {:>10}",
        "RANK",
        "SYMBOL",
        "NAME",
        format!("PRICE ({quote_key})"),
        "MARKET CAP",
        "24H %"
    ));
    for listing in &listings {
        let Some(quote) = listing.quote_in(quote_key) else {
            println!(
                "{:<6} {:<10} {:<24} {:>16} {:>12} {:>10}",
                listing.cmc_rank, listing.symbol, listing.name, "-", "-", "-"
            );
            continue;
        };
        println!(
            "{:<6} {:<10} {:<24} {:>16} {:>12} {:>10.2}",
            listing.cmc_rank,
            listing.symbol,
            listing.name,
            price(quote.price),
            human_amount(quote.market_cap),
            quote.percent_change_24h
        );
    }

    println!("\nTotal: {} listings", listings.len());
    Ok(())
}
