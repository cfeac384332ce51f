//! Stock monitor CLI: quote sources, screen layout and the prompt loop.

pub mod display;
pub mod error;
pub mod shell;
pub mod source;

pub use error::SourceError;
