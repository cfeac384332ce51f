// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and the text rendering pipeline (validate -> scale -> canvas -> framed block).

use chrono::NaiveDateTime;

use crate::axis::{PriceAxis, TimeAxis};
use crate::error::ChartError;
use crate::glyph::GlyphMap;
use crate::grid::Canvas;
use crate::scale::{compute_range, normalize, ValueRange, ValueScale};
use crate::series::{split_quotes, Quote, Series};
use crate::text::{cell_width, Block, TextRow, Tone};
use crate::types::{Dimensions, HEIGHT, LABEL_MARGIN, POINT_SPACING};

const LEGEND_PREFIX: &str = " Legend: ";

pub struct RenderOptions {
    pub plot_rows: usize,
    pub spacing: usize,
    pub label_margin: usize,
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            plot_rows: HEIGHT,
            spacing: POINT_SPACING,
            label_margin: LABEL_MARGIN,
            title: "✧ Price Chart ✧".to_string(),
        }
    }
}

/// Output of one render: the framed block plus the geometry it was laid out with.
#[derive(Clone, Debug)]
pub struct RenderedChart {
    pub block: Block,
    pub range: ValueRange,
    pub dims: Dimensions,
}

impl RenderedChart {
    pub fn width(&self) -> usize { self.block.width() }

    pub fn to_plain_string(&self) -> String { self.block.to_plain_string() }
}

#[derive(Clone, Debug, Default)]
pub struct Chart {
    pub series: Vec<Series>,
    pub timestamps: Vec<NaiveDateTime>,
}

impl Chart {
    pub fn new(timestamps: Vec<NaiveDateTime>) -> Self {
        Self { series: Vec::new(), timestamps }
    }

    /// Open/high/low/close chart over `quotes`, in the order given.
    pub fn from_quotes(quotes: &[Quote]) -> Self {
        let (series, timestamps) = split_quotes(quotes);
        Self { series, timestamps }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Reject malformed input before any canvas is built. Returns the point count.
    pub fn validate(&self, glyphs: &GlyphMap) -> Result<usize, ChartError> {
        let n = self.timestamps.len();
        if n == 0 || self.series.is_empty() {
            return Err(ChartError::Empty);
        }
        for s in &self.series {
            if s.len() != n {
                return Err(ChartError::LengthMismatch { name: s.name.clone(), expected: n, found: s.len() });
            }
            if glyphs.get(&s.name).is_none() {
                return Err(ChartError::MissingGlyph(s.name.clone()));
            }
            if let Some(index) = s.values.iter().position(|v| !v.is_finite()) {
                return Err(ChartError::NonFinite { name: s.name.clone(), index });
            }
        }
        Ok(n)
    }

    /// Padded value range across every series.
    pub fn value_range(&self) -> Option<ValueRange> {
        compute_range(self.series.iter().map(|s| s.values.as_slice()))
    }

    pub fn render(&self, glyphs: &GlyphMap, opts: &RenderOptions) -> Result<RenderedChart, ChartError> {
        let n = self.validate(glyphs)?;
        let range = self.value_range().ok_or(ChartError::Empty)?;
        let dims = Dimensions::new(n, opts.plot_rows.max(2), opts.spacing.max(1));

        // Background first, data last: gridlines only claim blank cells, glyphs overwrite.
        let mut canvas = Canvas::new(dims);
        canvas.draw_vertical_gridlines(glyphs.grid_vertical);
        canvas.draw_horizontal_gridlines(glyphs.grid_horizontal);
        for s in &self.series {
            // validate() guarantees a glyph for every series
            if let Some(glyph) = glyphs.get(&s.name) {
                canvas.plot(&normalize(&s.values, range, dims.plot_rows), glyph);
            }
        }

        let price_axis = PriceAxis::new(ValueScale::new(range, dims.plot_rows));
        let body_lines = dims.rows() - 1;
        let labels: Vec<String> = (0..body_lines).map(|line| price_axis.label(line)).collect();
        let label_width = labels.iter().map(|l| cell_width(l)).max().unwrap_or(0);
        let origin = label_width + 3;

        let legend = self.legend_entries(glyphs);
        let legend_width = cell_width(LEGEND_PREFIX)
            + legend.iter().map(|(_, name)| cell_width(name) + 2).sum::<usize>()
            + legend.len().saturating_sub(1);
        let width = (dims.data_width() + opts.label_margin)
            .max(origin + dims.cols() + 1)
            .max(legend_width + 2)
            .max(cell_width(&opts.title) + 4);

        let mut block = Block::new();
        block.push(TextRow::rule(width, '╭', '─', '╮'));

        let mut title = TextRow::framed(width, '│', '│');
        title.write_centered(&opts.title, Tone::Label);
        block.push(title);

        let mut legend_row = TextRow::framed(width, '│', '│');
        let mut col = legend_row.write(1, LEGEND_PREFIX, Tone::Plain);
        for (i, (glyph, name)) in legend.iter().enumerate() {
            if i > 0 {
                col += 1;
            }
            legend_row.put(col, *glyph, Tone::Plot);
            col = legend_row.write(col + 2, name, Tone::Plain);
        }
        block.push(legend_row);
        block.push(TextRow::framed(width, '│', '│'));

        for (line, label) in labels.iter().enumerate() {
            let mut row = TextRow::framed(width, '│', '│');
            row.write(2 + label_width - cell_width(label), label, Tone::Label);
            row.blit(origin, &canvas.row(line));
            block.push(row);
        }

        let mut axis = TextRow::framed(width, '│', '│');
        axis.fill(2, label_width, '─', Tone::Frame);
        axis.put(origin - 1, '╮', Tone::Frame);
        axis.fill(origin, dims.cols(), '─', Tone::Frame);
        block.push(axis);

        let mut times = TextRow::framed(width, '│', '│');
        TimeAxis::from_timestamps(&self.timestamps).write_into(&mut times, origin, dims);
        block.push(times);

        block.push(TextRow::rule(width, '╰', '─', '╯'));
        Ok(RenderedChart { block, range, dims })
    }

    fn legend_entries(&self, glyphs: &GlyphMap) -> Vec<(char, String)> {
        self.series
            .iter()
            .filter_map(|s| glyphs.get(&s.name).map(|g| (g, s.display_name())))
            .collect()
    }
}

/// Render `series` over `timestamps` with default options into a plain text block.
pub fn render(series: &[Series], timestamps: &[NaiveDateTime], glyphs: &GlyphMap) -> Result<String, ChartError> {
    let chart = Chart { series: series.to_vec(), timestamps: timestamps.to_vec() };
    Ok(chart.render(glyphs, &RenderOptions::default())?.to_plain_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{parse_timestamp, CLOSE, OPEN};

    fn stamps(n: usize) -> Vec<NaiveDateTime> {
        let base = parse_timestamp("2024-03-01 09:30:00").unwrap();
        (0..n).map(|i| base + chrono::Duration::minutes(5 * i as i64)).collect()
    }

    #[test]
    fn rejects_length_mismatch_before_drawing() {
        let mut chart = Chart::new(stamps(3));
        chart.add_series(Series::new(CLOSE, vec![1.0, 2.0, 3.0]));
        chart.add_series(Series::new(OPEN, vec![1.0, 2.0]));
        let err = chart.render(&GlyphMap::standard(), &RenderOptions::default()).unwrap_err();
        assert_eq!(err, ChartError::LengthMismatch { name: OPEN.into(), expected: 3, found: 2 });
    }

    #[test]
    fn rejects_empty_and_unknown_inputs() {
        let g = GlyphMap::standard();
        assert_eq!(Chart::new(stamps(2)).validate(&g), Err(ChartError::Empty));
        assert_eq!(Chart::new(Vec::new()).validate(&g), Err(ChartError::Empty));

        let mut chart = Chart::new(stamps(2));
        chart.add_series(Series::new("volume", vec![1.0, 2.0]));
        assert_eq!(chart.validate(&g), Err(ChartError::MissingGlyph("volume".into())));

        let mut chart = Chart::new(stamps(2));
        chart.add_series(Series::new(CLOSE, vec![1.0, f64::NAN]));
        assert_eq!(chart.validate(&g), Err(ChartError::NonFinite { name: CLOSE.into(), index: 1 }));
    }

    #[test]
    fn single_point_widens_to_fit_legend() {
        let mut chart = Chart::new(stamps(1));
        for name in ["open", "high", "low", "close"] {
            chart.add_series(Series::new(name, vec![42.0]));
        }
        let out = chart.render(&GlyphMap::standard(), &RenderOptions::default()).unwrap();
        let w = out.width();
        assert!(w > 3 + LABEL_MARGIN);
        assert!(out.block.lines().all(|l| l.chars().count() == w));
        assert!(out.block.rows[2].to_plain().contains("▽ Low"));
    }

    #[test]
    fn flat_series_plot_on_bottom_row() {
        let mut chart = Chart::new(stamps(3));
        chart.add_series(Series::new(CLOSE, vec![5.0, 5.0, 5.0]));
        let out = chart.render(&GlyphMap::standard(), &RenderOptions::default()).unwrap();
        // header rows (border, title, legend, blank) precede canvas line 0
        let bottom_plot_line = &out.block.rows[4 + HEIGHT - 1].to_plain();
        assert_eq!(bottom_plot_line.matches('⬤').count(), 3);
    }

    #[test]
    fn free_render_matches_chart_render() {
        let ts = stamps(4);
        let series = vec![Series::new(CLOSE, vec![1.0, 3.0, 2.0, 4.0])];
        let text = render(&series, &ts, &GlyphMap::standard()).unwrap();
        let chart = Chart { series, timestamps: ts };
        let direct = chart.render(&GlyphMap::standard(), &RenderOptions::default()).unwrap();
        assert_eq!(text, direct.to_plain_string());
    }
}
