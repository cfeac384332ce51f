// File: crates/chart-core/src/types.rs
// Summary: Shared layout constants (canvas resolution, spacing, margins).

/// Plot rows available to the scaler.
pub const HEIGHT: usize = 20;
/// Canvas columns consumed per data point (glyph column plus two spacers).
pub const POINT_SPACING: usize = 3;
/// Extra columns reserved around the canvas for the price axis and frame.
pub const LABEL_MARGIN: usize = 30;
/// Fraction of the raw span added above and below the data.
pub const RANGE_PADDING: f64 = 0.1;
/// Horizontal gridline period, in rows.
pub const GRID_ROW_PERIOD: usize = 4;
/// Minimum width of the right-aligned price label field.
pub const PRICE_LABEL_WIDTH: usize = 8;
/// Default width of the summary box.
pub const SUMMARY_WIDTH: usize = 50;

/// Canvas geometry for one render, in cells.
/// Contract: `rows = plot_rows + 2` and `cols = points * spacing + 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub points: usize,
    pub plot_rows: usize,
    pub spacing: usize,
}

impl Dimensions {
    pub const fn new(points: usize, plot_rows: usize, spacing: usize) -> Self {
        Self { points, plot_rows, spacing }
    }
    /// Columns holding data (excludes the two border columns).
    pub const fn data_width(&self) -> usize { self.points * self.spacing }
    /// Full canvas width including both border columns.
    pub const fn cols(&self) -> usize { self.data_width() + 2 }
    /// Full canvas height: plot rows, header row, reserved footer row.
    pub const fn rows(&self) -> usize { self.plot_rows + 2 }
    /// Canvas column of point `i`, centered in its slot.
    pub const fn column_of(&self, i: usize) -> usize { i * self.spacing + 1 }
}
