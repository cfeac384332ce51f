//! Offline quote source backed by a CSV file.
//!
//! Expected header: `timestamp,open,high,low,close` with an optional `symbol` column.
//! Without a symbol column every row belongs to whichever symbol is requested.

use std::io::Read;
use std::path::PathBuf;

use chart_core::series::parse_timestamp;
use chart_core::Quote;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{most_recent, QuoteSource};
use crate::error::SourceError;

#[derive(Debug, Deserialize)]
struct Row {
    timestamp: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    #[serde(default)]
    symbol: Option<String>,
}

/// Read rows matching `symbol` (case-insensitive) and keep the most recent window.
pub fn read_quotes<R: Read>(reader: R, symbol: &str) -> Result<Vec<Quote>, SourceError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut quotes = Vec::new();
    for (line, rec) in rdr.deserialize::<Row>().enumerate() {
        let row = rec?;
        if let Some(s) = row.symbol.as_deref() {
            if !s.eq_ignore_ascii_case(symbol) {
                continue;
            }
        }
        let timestamp = parse_timestamp(&row.timestamp)
            .map_err(|e| SourceError::Parse(format!("row {}: timestamp '{}': {e}", line + 1, row.timestamp)))?;
        let q = Quote { timestamp, open: row.open, high: row.high, low: row.low, close: row.close };
        if let Err(why) = q.check() {
            warn!(row = line + 1, %why, "inconsistent OHLC row kept as-is");
        }
        quotes.push(q);
    }
    if quotes.is_empty() {
        return Err(SourceError::SymbolNotFound(symbol.to_string()));
    }
    Ok(most_recent(quotes))
}

pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuoteSource for CsvSource {
    fn name(&self) -> &str { "csv" }

    fn fetch(&self, symbol: &str) -> Result<Vec<Quote>, SourceError> {
        debug!(path = %self.path.display(), symbol, "reading quotes from CSV");
        let file = std::fs::File::open(&self.path)?;
        read_quotes(file, symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &str = "\
timestamp,open,high,low,close,symbol
2024-03-01 09:35:00,11,12,10,11.5,IBM
2024-03-01 09:30:00,10,11,9.5,11,IBM
2024-03-01 09:30:00,400,401,399,400.5,MSFT
";

    #[test]
    fn filters_by_symbol_and_sorts() {
        let quotes = read_quotes(MIXED.as_bytes(), "ibm").unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].close, 11.0);
        assert_eq!(quotes[1].close, 11.5);
    }

    #[test]
    fn missing_symbol_is_not_found() {
        assert!(matches!(read_quotes(MIXED.as_bytes(), "AAPL"), Err(SourceError::SymbolNotFound(_))));
    }

    #[test]
    fn symbol_column_is_optional() {
        let data = "timestamp,open,high,low,close\n2024-03-01 09:30:00, 10, 11, 9, 10.5\n";
        let quotes = read_quotes(data.as_bytes(), "ANY").unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].high, 11.0);
    }

    #[test]
    fn bad_rows_fail_loudly() {
        let bad_ts = "timestamp,open,high,low,close\n03/01/2024,10,11,9,10\n";
        assert!(matches!(read_quotes(bad_ts.as_bytes(), "X"), Err(SourceError::Parse(_))));
        let bad_num = "timestamp,open,high,low,close\n2024-03-01 09:30:00,ten,11,9,10\n";
        assert!(matches!(read_quotes(bad_num.as_bytes(), "X"), Err(SourceError::Csv(_))));
    }

    #[test]
    fn fetch_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("stock-cli-test-{}.csv", std::process::id()));
        std::fs::write(&path, MIXED).unwrap();
        let quotes = CsvSource::new(&path).fetch("MSFT").unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].open, 400.0);

        let missing = CsvSource::new("/nonexistent/quotes.csv").fetch("MSFT");
        assert!(matches!(missing, Err(SourceError::Io(_))));
    }
}
