//! Alpha Vantage `TIME_SERIES_INTRADAY` client.

use std::collections::BTreeMap;
use std::time::Duration;

use chart_core::series::parse_timestamp;
use chart_core::Quote;
use serde::Deserialize;
use tracing::{debug, info};

use super::{most_recent, QuoteSource, INTERVAL};
use crate::error::SourceError;

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Response body. Exactly one of the fields is normally present.
#[derive(Debug, Deserialize)]
struct IntradayResponse {
    #[serde(rename = "Time Series (5min)")]
    series: Option<BTreeMap<String, Bar>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

/// Numbers arrive as strings.
#[derive(Debug, Deserialize)]
struct Bar {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
}

fn number(field: &str, raw: &str, ts: &str) -> Result<f64, SourceError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SourceError::Parse(format!("bad {field} value '{raw}' at {ts}")))
}

/// Decode an intraday payload into the most recent quotes, oldest first.
pub fn parse_intraday(body: &str, symbol: &str) -> Result<Vec<Quote>, SourceError> {
    let resp: IntradayResponse =
        serde_json::from_str(body).map_err(|e| SourceError::Parse(e.to_string()))?;

    let Some(series) = resp.series else {
        if let Some(msg) = resp.error_message {
            debug!(symbol, %msg, "provider rejected symbol");
            return Err(SourceError::SymbolNotFound(symbol.to_string()));
        }
        if let Some(msg) = resp.note.or(resp.information) {
            return Err(SourceError::ApiNotice(msg));
        }
        return Err(SourceError::Parse("missing time series".to_string()));
    };
    if series.is_empty() {
        return Err(SourceError::SymbolNotFound(symbol.to_string()));
    }

    let mut quotes = Vec::with_capacity(series.len());
    for (ts, bar) in &series {
        let timestamp = parse_timestamp(ts).map_err(|e| SourceError::Parse(format!("timestamp '{ts}': {e}")))?;
        quotes.push(Quote {
            timestamp,
            open: number("open", &bar.open, ts)?,
            high: number("high", &bar.high, ts)?,
            low: number("low", &bar.low, ts)?,
            close: number("close", &bar.close, ts)?,
        });
    }
    Ok(most_recent(quotes))
}

pub struct AlphaVantage {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl AlphaVantage {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("stock-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base_url: base_url.into(), api_key: api_key.into() })
    }
}

impl QuoteSource for AlphaVantage {
    fn name(&self) -> &str { "alphavantage" }

    fn fetch(&self, symbol: &str) -> Result<Vec<Quote>, SourceError> {
        info!(symbol, interval = INTERVAL, "fetching intraday series");
        let body = self
            .client
            .get(&self.base_url)
            .query(&[
                ("function", "TIME_SERIES_INTRADAY"),
                ("symbol", symbol),
                ("interval", INTERVAL),
                ("apikey", self.api_key.as_str()),
                ("datatype", "json"),
            ])
            .send()?
            .error_for_status()?
            .text()?;
        let quotes = parse_intraday(&body, symbol)?;
        debug!(symbol, count = quotes.len(), "parsed intraday series");
        Ok(quotes)
    }
}
