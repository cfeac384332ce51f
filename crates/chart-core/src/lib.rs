// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the text chart and summary box API.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod error;
pub mod scale;
pub mod glyph;
pub mod theme;
pub mod text;
pub mod summary;

pub use chart::{render, Chart, RenderOptions, RenderedChart};
pub use series::{Quote, Series};
pub use error::ChartError;
pub use glyph::GlyphMap;
pub use scale::{compute_range, normalize, ValueRange};
pub use theme::Theme;
pub use text::{Block, Tone};
pub use summary::Summary;
