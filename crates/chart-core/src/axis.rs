// File: crates/chart-core/src/axis.rs
// Summary: Price (Y) and time (X) axis labels aligned to canvas rows/columns.

use chrono::NaiveDateTime;

use crate::scale::ValueScale;
use crate::text::{cell_width, TextRow, Tone};
use crate::types::{Dimensions, PRICE_LABEL_WIDTH};

/// Y axis: one price label per canvas line.
#[derive(Clone, Copy, Debug)]
pub struct PriceAxis {
    pub scale: ValueScale,
}

impl PriceAxis {
    pub fn new(scale: ValueScale) -> Self { Self { scale } }

    /// Price of canvas line `line` (0 = top), right-aligned in an 8-cell field, 2 decimals.
    pub fn label(&self, line: usize) -> String {
        format!("{:>w$.2}", self.scale.value_at_line(line), w = PRICE_LABEL_WIDTH)
    }
}

/// X axis: `HH:MM` labels, centered under the point columns they annotate.
#[derive(Clone, Debug)]
pub struct TimeAxis {
    pub labels: Vec<String>,
}

impl TimeAxis {
    pub fn from_timestamps(timestamps: &[NaiveDateTime]) -> Self {
        Self { labels: timestamps.iter().map(|t| t.format("%H:%M").to_string()).collect() }
    }

    /// Every `stride`-th point gets a label so neighbours keep at least one blank cell between them.
    pub fn stride(&self, spacing: usize) -> usize {
        let widest = self.labels.iter().map(|l| cell_width(l)).max().unwrap_or(0);
        (widest + 1).div_ceil(spacing.max(1)).max(1)
    }

    /// Write labels into `row`, where canvas column 0 sits at row column `origin`.
    pub fn write_into(&self, row: &mut TextRow, origin: usize, dims: Dimensions) {
        let stride = self.stride(dims.spacing);
        for (i, label) in self.labels.iter().enumerate().step_by(stride) {
            let center = origin + dims.column_of(i);
            let start = center.saturating_sub(cell_width(label) / 2);
            row.write(start, label, Tone::Label);
        }
    }
}
