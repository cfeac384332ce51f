// File: crates/chart-core/src/text.rs
// Summary: Fixed-width cell rows and blocks; every layout line is built from these.
// Notes:
// - Width is counted in Unicode scalar values: one `char` occupies one cell.
//   Every glyph used by the layouts is a single code point, so rows built here
//   have equal `chars().count()` by construction.

/// Semantic styling tag carried by each cell. Themes map tones to colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    Plain,
    Frame,
    Plot,
    Label,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tone: Tone,
}

impl Cell {
    pub const BLANK: Cell = Cell { ch: ' ', tone: Tone::Plain };

    pub const fn new(ch: char, tone: Tone) -> Self {
        Self { ch, tone }
    }
}

/// Width of `s` in cells.
#[inline]
pub fn cell_width(s: &str) -> usize {
    s.chars().count()
}

/// A row of exactly `width` cells. Writes past the writable limit are clipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRow {
    cells: Vec<Cell>,
    limit: usize,
}

impl TextRow {
    pub fn blank(width: usize) -> Self {
        Self { cells: vec![Cell::BLANK; width], limit: width }
    }

    /// Row with a frame character in the first and last cell; writes stay inside them.
    pub fn framed(width: usize, left: char, right: char) -> Self {
        let mut row = Self::blank(width);
        if width >= 2 {
            row.cells[0] = Cell::new(left, Tone::Frame);
            row.cells[width - 1] = Cell::new(right, Tone::Frame);
            row.limit = width - 1;
        }
        row
    }

    /// Framed row whose interior is filled with `fill` (borders and separators).
    pub fn rule(width: usize, left: char, fill: char, right: char) -> Self {
        let mut row = Self::framed(width, left, right);
        let inner = row.limit.saturating_sub(1);
        row.fill(1, inner, fill, Tone::Frame);
        row
    }

    pub fn width(&self) -> usize { self.cells.len() }

    pub fn cells(&self) -> &[Cell] { &self.cells }

    pub fn get(&self, col: usize) -> Option<Cell> { self.cells.get(col).copied() }

    pub fn put(&mut self, col: usize, ch: char, tone: Tone) {
        if col < self.limit {
            self.cells[col] = Cell::new(ch, tone);
        }
    }

    /// Write `s` starting at `col`; returns the column after the last character.
    pub fn write(&mut self, col: usize, s: &str, tone: Tone) -> usize {
        let mut c = col;
        for ch in s.chars() {
            self.put(c, ch, tone);
            c += 1;
        }
        c
    }

    /// Write `s` so that it is centered within the writable interior.
    pub fn write_centered(&mut self, s: &str, tone: Tone) {
        let start = if self.limit < self.width() { 1 } else { 0 };
        let room = self.limit - start;
        let pad = room.saturating_sub(cell_width(s)) / 2;
        self.write(start + pad, s, tone);
    }

    /// Copy every cell of `src` into this row starting at `col`.
    pub fn blit(&mut self, col: usize, src: &TextRow) {
        for (i, cell) in src.cells.iter().enumerate() {
            self.put(col + i, cell.ch, cell.tone);
        }
    }

    pub fn fill(&mut self, col: usize, len: usize, ch: char, tone: Tone) {
        for c in col..col + len {
            self.put(c, ch, tone);
        }
    }

    pub fn to_plain(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }
}

/// An ordered stack of equal-width rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub rows: Vec<TextRow>,
}

impl Block {
    pub fn new() -> Self { Self { rows: Vec::new() } }

    pub fn push(&mut self, row: TextRow) { self.rows.push(row); }

    /// Width of the widest row (all rows share it for blocks built by this crate).
    pub fn width(&self) -> usize {
        self.rows.iter().map(TextRow::width).max().unwrap_or(0)
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(TextRow::to_plain)
    }

    pub fn to_plain_string(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framed_rows_clip_inside_borders() {
        let mut row = TextRow::framed(8, '│', '│');
        let end = row.write(1, "abcdefghij", Tone::Plain);
        assert_eq!(end, 11);
        assert_eq!(row.to_plain(), "│abcdef│");
        assert_eq!(row.width(), 8);
    }

    #[test]
    fn centered_text_leaves_extra_space_right() {
        let mut row = TextRow::framed(9, '│', '│');
        row.write_centered("ab", Tone::Label);
        assert_eq!(row.to_plain(), "│  ab   │");
    }

    #[test]
    fn rule_fills_interior() {
        let row = TextRow::rule(5, '╭', '─', '╮');
        assert_eq!(row.to_plain(), "╭───╮");
        assert!(row.cells().iter().all(|c| c.tone == Tone::Frame));
    }

    #[test]
    fn multibyte_glyphs_occupy_one_cell() {
        let mut row = TextRow::blank(4);
        row.write(0, "⬤◯△▽", Tone::Plot);
        assert_eq!(cell_width(&row.to_plain()), 4);
        assert!(row.to_plain().len() > 4);
    }
}
