//! cmcpro CLI - CoinMarketCap Pro API client.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use cmcpro_lib::prelude::*;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "cmcpro")]
#[command(about = "CoinMarketCap Pro API client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// API key. Defaults to $CMC_PRO_API_KEY.
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Use the sandbox API
    #[arg(long, global = true)]
    sandbox: bool,

    /// Override the API domain (e.g. http://localhost:8080)
    #[arg(long, global = true)]
    domain: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    timeout: u64,

    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    format: Format,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Map cryptocurrencies to CoinMarketCap ids
    Map {
        /// Listing status (active, inactive, untracked)
        #[arg(short, long, default_value = "active")]
        status: String,

        /// First rank to return (1-based)
        #[arg(long, default_value = "1")]
        start: u32,

        /// Number of results
        #[arg(short, long, default_value = "100")]
        limit: u32,

        /// Comma-separated symbols to filter by
        #[arg(long)]
        symbol: Option<String>,

        /// Fetch all active currencies (ignores other filters)
        #[arg(long)]
        all: bool,
    },

    /// Show static metadata for currencies
    Info {
        /// Comma-separated symbols, or ids with --by-id
        currencies: String,

        /// Treat the argument as CoinMarketCap ids
        #[arg(long)]
        by_id: bool,
    },

    /// Latest listings with market data
    Listings {
        /// First rank to return (1-based)
        #[arg(long, default_value = "1")]
        start: u32,

        /// Number of results
        #[arg(short, long, default_value = "100")]
        limit: u32,

        /// Comma-separated quote currencies, or ids with --by-id [default: USD]
        #[arg(short, long)]
        convert: Option<String>,

        /// Treat --convert as CoinMarketCap ids
        #[arg(long)]
        by_id: bool,

        /// Fetch the first 5000 listings in BTC and USD (ignores other options)
        #[arg(long)]
        all: bool,
    },

    /// Latest quotes for selected currencies
    Quotes {
        /// Comma-separated symbols, or ids with --by-id
        currencies: String,

        /// Comma-separated quote currencies, or ids with --by-id [default: USD]
        #[arg(short, long)]
        convert: Option<String>,

        /// Treat arguments as CoinMarketCap ids
        #[arg(long)]
        by_id: bool,
    },

    /// Global market metrics
    Global {
        /// Comma-separated quote currencies, or ids with --by-id [default: USD]
        #[arg(short, long)]
        convert: Option<String>,

        /// Treat --convert as CoinMarketCap ids
        #[arg(long)]
        by_id: bool,
    },

    /// Convert an amount between currencies
    Convert {
        /// Amount to convert
        amount: f64,

        /// Source currency symbol, or id with --by-id
        from: String,

        /// Comma-separated target currencies, or ids with --by-id [default: USD]
        to: Option<String>,

        /// Treat currencies as CoinMarketCap ids
        #[arg(long)]
        by_id: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let client = build_client(
        cli.api_key.as_deref(),
        cli.sandbox,
        cli.domain.as_deref(),
        cli.timeout,
    )?;
    let format = if cli.json { Format::Json } else { cli.format };

    match command {
        Commands::Map {
            status,
            start,
            limit,
            symbol,
            all,
        } => {
            commands::map::currency_map(
                &client,
                &status,
                start,
                limit,
                symbol.as_deref(),
                all,
                format,
            )
            .await
        }
        Commands::Info { currencies, by_id } => {
            commands::info::currency_info(&client, &currencies, by_id, format).await
        }
        Commands::Listings {
            start,
            limit,
            convert,
            by_id,
            all,
        } => {
            let convert = quote_currencies(convert, by_id);
            commands::listings::listings(&client, start, limit, &convert, by_id, all, format).await
        }
        Commands::Quotes {
            currencies,
            convert,
            by_id,
        } => {
            let convert = quote_currencies(convert, by_id);
            commands::quotes::quotes(&client, &currencies, &convert, by_id, format).await
        }
        Commands::Global { convert, by_id } => {
            let convert = quote_currencies(convert, by_id);
            commands::global::global_metrics(&client, &convert, by_id, format).await
        }
        Commands::Convert {
            amount,
            from,
            to,
            by_id,
        } => {
            let to = quote_currencies(to, by_id);
            commands::convert::convert(&client, amount, &from, &to, by_id, format).await
        }
    }
}

/// CoinMarketCap id of USD.
const USD_ID: &str = "2781";

/// Resolves the quote currency list, defaulting to USD in the selector's form.
fn quote_currencies(convert: Option<String>, by_id: bool) -> String {
    convert.unwrap_or_else(|| if by_id { USD_ID } else { "USD" }.to_string())
}

/// Initializes tracing from `RUST_LOG`, or from the verbosity flag when unset.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,cmcpro_fetch={level},cmcpro={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Builds the API client from global flags.
fn build_client(
    api_key: Option<&str>,
    sandbox: bool,
    domain: Option<&str>,
    timeout_secs: u64,
) -> Result<CmcClient> {
    let api_key = api_key.unwrap_or_default();
    let mut config = if sandbox {
        ClientConfig::sandbox(api_key)
    } else {
        ClientConfig::new(api_key)
    };
    if let Some(domain) = domain {
        config = config.with_domain(domain);
    }
    config = config.with_timeout(Duration::from_secs(timeout_secs));

    if config.api_key.is_empty() {
        tracing::warn!("no API key given and CMC_PRO_API_KEY is not set");
    }

    CmcClient::new(config).context("Failed to create HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_options_after_command() {
        let cli = Cli::try_parse_from([
            "cmcpro", "quotes", "BTC,ETH", "--convert", "EUR", "--sandbox", "--format", "json",
        ])
        .unwrap();
        assert!(cli.sandbox);
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.timeout, 30);
        match cli.command {
            Some(Commands::Quotes {
                currencies,
                convert,
                by_id,
            }) => {
                assert_eq!(currencies, "BTC,ETH");
                assert_eq!(convert.as_deref(), Some("EUR"));
                assert!(!by_id);
            }
            _ => panic!("expected quotes command"),
        }
    }

    #[test]
    fn test_json_shorthand() {
        let cli = Cli::try_parse_from(["cmcpro", "--json", "global"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.format, Format::Table);
        assert!(matches!(cli.command, Some(Commands::Global { by_id: false, .. })));
    }

    #[test]
    fn test_parse_convert_defaults() {
        let cli = Cli::try_parse_from(["cmcpro", "convert", "1.5", "1", "--by-id"]).unwrap();
        match cli.command {
            Some(Commands::Convert {
                amount,
                from,
                to,
                by_id,
            }) => {
                assert!((amount - 1.5).abs() < f64::EPSILON);
                assert_eq!(from, "1");
                assert_eq!(quote_currencies(to, by_id), USD_ID);
                assert!(by_id);
            }
            _ => panic!("expected convert command"),
        }
    }

    #[test]
    fn test_id_mode_defaults_to_usd_id() {
        for args in [
            &["cmcpro", "quotes", "1,1027", "--by-id"][..],
            &["cmcpro", "global", "--by-id"][..],
            &["cmcpro", "listings", "--by-id"][..],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            let convert = match cli.command {
                Some(
                    Commands::Quotes { convert, by_id, .. }
                    | Commands::Global { convert, by_id }
                    | Commands::Listings { convert, by_id, .. },
                ) => quote_currencies(convert, by_id),
                _ => panic!("unexpected command for {args:?}"),
            };
            assert_eq!(convert, "2781", "{args:?}");
        }
    }

    #[test]
    fn test_symbol_mode_defaults_to_usd() {
        let cli = Cli::try_parse_from(["cmcpro", "global"]).unwrap();
        match cli.command {
            Some(Commands::Global { convert, by_id }) => {
                assert_eq!(quote_currencies(convert, by_id), "USD");
            }
            _ => panic!("expected global command"),
        }
    }

    #[test]
    fn test_explicit_convert_kept_in_id_mode() {
        let cli = Cli::try_parse_from(["cmcpro", "quotes", "1", "--by-id", "-c", "2790"]).unwrap();
        match cli.command {
            Some(Commands::Quotes { convert, by_id, .. }) => {
                assert_eq!(quote_currencies(convert, by_id), "2790");
            }
            _ => panic!("expected quotes command"),
        }
    }

    #[test]
    fn test_build_client_with_domain_and_timeout() {
        let client = build_client(Some("key"), true, Some("http://localhost:9"), 5).unwrap();
        assert_eq!(client.config().domain, "http://localhost:9");
        assert_eq!(client.config().timeout, Duration::from_secs(5));
        assert_eq!(client.config().api_key, "key");
    }
}
