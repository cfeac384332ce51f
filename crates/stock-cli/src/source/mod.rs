//! Quote sources.
//!
//! A source answers "the most recent intraday bars for a symbol", oldest first.

pub mod alpha_vantage;
pub mod csv_file;

use chart_core::Quote;

use crate::error::SourceError;

pub use self::alpha_vantage::AlphaVantage;
pub use self::csv_file::CsvSource;

/// Number of bars plotted per symbol.
pub const MAX_POINTS: usize = 15;
/// Bar interval requested from providers.
pub const INTERVAL: &str = "5min";

pub trait QuoteSource {
    /// Human-readable source name for logs.
    fn name(&self) -> &str;

    /// Up to `MAX_POINTS` most recent quotes, in chronological order.
    fn fetch(&self, symbol: &str) -> Result<Vec<Quote>, SourceError>;
}

/// Sort chronologically and keep the last `MAX_POINTS` quotes.
pub(crate) fn most_recent(mut quotes: Vec<Quote>) -> Vec<Quote> {
    quotes.sort_by_key(|q| q.timestamp);
    let skip = quotes.len().saturating_sub(MAX_POINTS);
    quotes.split_off(skip)
}
