// File: crates/chart-core/src/error.rs
// Summary: Input shape errors rejected before a canvas is built.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// No series, or series with zero points.
    #[error("chart has no data points")]
    Empty,

    #[error("length mismatch: series '{name}' has {found} points, expected {expected}")]
    LengthMismatch { name: String, expected: usize, found: usize },

    #[error("series '{name}' has a non-finite value at index {index}")]
    NonFinite { name: String, index: usize },

    #[error("no glyph configured for series '{0}'")]
    MissingGlyph(String),
}
