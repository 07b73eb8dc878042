//! Convert command implementation.

use crate::display::{Format, price, print_json, split_list};
use anyhow::{Context, Result, bail};
use cmcpro_lib::prelude::*;

/// Convert an amount of one currency into one or more others.
pub(crate) async fn convert(
    client: &CmcClient,
    amount: f64,
    from: &str,
    to: &str,
    by_id: bool,
    format: Format,
) -> Result<()> {
    if !amount.is_finite() {
        bail!("Amount must be a finite number, got {amount}");
    }

    let conversion = if by_id {
        client.price_conversion_by_id(amount, from, to).await
    } else {
        client.price_conversion_by_symbol(amount, from, to).await
    }
    .with_context(|| format!("Failed to convert {amount} {from}"))?;

    if format == Format::Json {
        return print_json(&conversion);
    }

    for key in split_list(to) {
        let value = conversion
            .price_in(key)
            .map_or_else(|| "?".to_string(), price);
        println!("{} {} = {value} {key}", conversion.amount, conversion.symbol);
    }

    Ok(())
}
