// File: crates/chart-core/src/grid.rs
// Summary: Character canvas with background gridlines and glyph plotting.

use crate::text::{Cell, TextRow, Tone};
use crate::types::{Dimensions, GRID_ROW_PERIOD};

/// Row-major grid of cells, local to one render.
#[derive(Clone, Debug)]
pub struct Canvas {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(dims: Dimensions) -> Self {
        Self { dims, cells: vec![Cell::BLANK; dims.rows() * dims.cols()] }
    }

    pub fn dims(&self) -> Dimensions { self.dims }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.dims.rows() && col < self.dims.cols()).then(|| row * self.dims.cols() + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    /// Unconditional write; out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = cell;
        }
    }

    /// Write only when the cell is still blank.
    pub fn set_if_blank(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(i) = self.idx(row, col) {
            if self.cells[i] == Cell::BLANK {
                self.cells[i] = cell;
            }
        }
    }

    /// Vertical gridlines on every slot boundary column, over every row but the reserved last one.
    pub fn draw_vertical_gridlines(&mut self, glyph: char) {
        let rows = self.dims.rows() - 1;
        for col in (0..self.dims.cols()).step_by(self.dims.spacing.max(1)) {
            for row in 0..rows {
                self.set_if_blank(row, col, Cell::new(glyph, Tone::Frame));
            }
        }
    }

    /// Horizontal gridlines every `GRID_ROW_PERIOD` rows; existing cells are kept.
    pub fn draw_horizontal_gridlines(&mut self, glyph: char) {
        let rows = self.dims.rows() - 1;
        for row in (0..rows).step_by(GRID_ROW_PERIOD) {
            for col in 0..self.dims.cols() {
                self.set_if_blank(row, col, Cell::new(glyph, Tone::Frame));
            }
        }
    }

    /// Place `glyph` for each normalized row (0 = bottom plot row), one point per slot.
    pub fn plot(&mut self, rows_from_bottom: &[usize], glyph: char) {
        let top = self.dims.plot_rows.saturating_sub(1);
        for (i, &r) in rows_from_bottom.iter().enumerate() {
            let row = top.saturating_sub(r);
            self.set(row, self.dims.column_of(i), Cell::new(glyph, Tone::Plot));
        }
    }

    pub fn row(&self, row: usize) -> TextRow {
        let mut out = TextRow::blank(self.dims.cols());
        for col in 0..self.dims.cols() {
            if let Some(c) = self.get(row, col) {
                out.put(col, c.ch, c.tone);
            }
        }
        out
    }
}
