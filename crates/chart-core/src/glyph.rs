// File: crates/chart-core/src/glyph.rs
// Summary: Fixed series-role -> glyph association and the background gridline glyphs.

use crate::series::{CLOSE, HIGH, LOW, OPEN};

/// Immutable glyph configuration. Built once and passed by reference into renders.
#[derive(Clone, Debug)]
pub struct GlyphMap {
    entries: Vec<(&'static str, char)>,
    pub grid_vertical: char,
    pub grid_horizontal: char,
}

impl GlyphMap {
    /// Glyphs for the four price roles.
    pub fn standard() -> Self {
        Self {
            entries: vec![(CLOSE, '⬤'), (OPEN, '◯'), (HIGH, '△'), (LOW, '▽')],
            grid_vertical: '⋮',
            grid_horizontal: '⋅',
        }
    }

    /// Glyph for a series role; role names match case-insensitively.
    pub fn get(&self, role: &str) -> Option<char> {
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(role))
            .map(|&(_, glyph)| glyph)
    }

    pub fn roles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(name, _)| name)
    }
}

impl Default for GlyphMap {
    fn default() -> Self { Self::standard() }
}
