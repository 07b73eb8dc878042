//! Info command implementation.

use crate::display::{Format, print_json, split_list};
use anyhow::{Context, Result};
use cmcpro_lib::prelude::*;

/// Fetch and display static metadata for one or more currencies.
pub(crate) async fn currency_info(
    client: &CmcClient,
    currencies: &str,
    by_id: bool,
    format: Format,
) -> Result<()> {
    let info = if by_id {
        client.currency_info_by_id(currencies).await
    } else {
        client.currency_info_by_symbol(currencies).await
    }
    .with_context(|| format!("Failed to fetch info for {currencies}"))?;

    if format == Format::Json {
        return print_json(&info);
    }

    // Keep the order the user asked for; the API returns a map.
    for key in split_list(currencies) {
        let Some(entry) = info.get(key) else {
            println!("{key}: not found\n");
            continue;
        };

        println!("{} ({})", entry.name, entry.symbol);
        println!("{}", "=".repeat(40));
        println!("ID:         {}", entry.id);
        println!("Slug:       {}", entry.slug);
        println!("Category:   {}", entry.category);
        if !entry.date_added.is_zero() {
            println!("Added:      {}", entry.date_added);
        }
        if let Some(platform) = &entry.platform {
            println!("Platform:   {} ({})", platform.name, platform.token_address);
        }
        if !entry.tags.is_empty() {
            println!("Tags:       {}", entry.tags.join(", "));
        }
        if let Some(urls) = &entry.urls {
            for website in &urls.website {
                println!("Website:    {website}");
            }
        }
        if !entry.description.is_empty() {
            println!("\n{}", entry.description);
        }
        println!();
    }

    Ok(())
}
