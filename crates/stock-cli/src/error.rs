//! Quote source errors.

use thiserror::Error;

/// Why quotes for a symbol could not be produced. The chart is never rendered in these cases.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport failure or non-success HTTP status
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Payload did not have the expected shape
    #[error("could not parse response: {0}")]
    Parse(String),

    /// Provider or file has no data for the symbol
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// Provider answered with an informational note instead of data (rate limit, key issue)
    #[error("data provider notice: {0}")]
    ApiNotice(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
