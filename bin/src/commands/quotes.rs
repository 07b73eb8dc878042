//! Quotes command implementation.

use crate::display::{Format, human_amount, price, print_header, print_json, split_list};
use anyhow::{Context, Result};
use cmcpro_lib::prelude::*;

/// Fetch and display the latest quotes for selected currencies.
pub(crate) async fn quotes(
    client: &CmcClient,
    currencies: &str,
    convert: &str,
    by_id: bool,
    format: Format,
) -> Result<()> {
    let quotes = if by_id {
        client.quotes_latest_by_id(currencies, convert).await
    } else {
        client.quotes_latest_by_symbol(currencies, convert).await
    }
    .with_context(|| format!("Failed to fetch quotes for {currencies}"))?;

    if format == Format::Json {
        return print_json(&quotes);
    }

    print_header(&format!(
        "{:<10} {:<8} {:>16} {:>12} {:>12} {:>8} {:>8}",
        "SYMBOL", "QUOTE", "PRICE", "MARKET CAP", "VOLUME 24H", "1H %", "24H %"
    ));
    for key in split_list(currencies) {
        let Some(listing) = quotes.get(key) else {
            println!("{key:<10} not found");
            continue;
        };
        for quote_key in split_list(convert) {
            let Some(quote) = listing.quote_in(quote_key) else {
                continue;
            };
            println!(
                "{:<10} {:<8} {:>16} {:>12} {:>12} {:>8.2} {:>8.2}",
                listing.symbol,
                quote_key,
                price(quote.price),
                human_amount(quote.market_cap),
                human_amount(quote.volume_24h),
                quote.percent_change_1h,
                quote.percent_change_24h
            );
        }
    }

    Ok(())
}
