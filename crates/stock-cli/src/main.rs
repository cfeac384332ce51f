//! Stock monitor CLI.
//!
//! # Usage
//!
//! ```bash
//! # interactive prompt against Alpha Vantage
//! ALPHAVANTAGE_API_KEY=... stock-cli
//!
//! # render one symbol and exit
//! stock-cli IBM
//!
//! # offline, from a CSV export (timestamp,open,high,low,close[,symbol])
//! stock-cli --csv quotes.csv IBM
//! ```

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chart_core::{theme, Theme};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stock_cli::shell::Shell;
use stock_cli::source::alpha_vantage::DEFAULT_BASE_URL;
use stock_cli::source::{AlphaVantage, CsvSource, QuoteSource};

#[derive(Parser)]
#[command(name = "stock-cli")]
#[command(about = "Terminal stock monitor - intraday OHLC chart and summary", long_about = None)]
#[command(version)]
struct Cli {
    /// Render this symbol once and exit (omit for the interactive prompt)
    symbol: Option<String>,

    /// Alpha Vantage API key
    #[arg(long, env = "ALPHAVANTAGE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Alpha Vantage query endpoint
    #[arg(long, env = "ALPHAVANTAGE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Read quotes from a CSV file instead of the network
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Color theme (dark, light, mono)
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Disable colors
    #[arg(long, default_value = "false")]
    no_color: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_source(cli: &Cli) -> Result<Box<dyn QuoteSource>> {
    if let Some(path) = &cli.csv {
        return Ok(Box::new(CsvSource::new(path)));
    }
    let Some(key) = cli.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
        bail!("no data source: set ALPHAVANTAGE_API_KEY (or --api-key), or pass --csv <PATH>");
    };
    let source = AlphaVantage::new(&cli.base_url, key, Duration::from_secs(cli.timeout_secs))
        .context("failed to build HTTP client")?;
    Ok(Box::new(source))
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let colors = if cli.no_color || !interactive { Theme::mono() } else { theme::find(&cli.theme) };

    let source = build_source(&cli)?;
    info!(source = source.name(), theme = colors.name, "starting");

    let mut shell = Shell::new(source.as_ref(), colors);
    if !interactive {
        shell = shell.without_clear();
    }

    let mut out = stdout.lock();
    match cli.symbol.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(symbol) => shell.show(&symbol.to_uppercase(), &mut out).context("failed to write output")?,
        None => shell.run(io::stdin().lock(), &mut out).context("prompt loop failed")?,
    }
    out.flush()?;
    Ok(())
}
