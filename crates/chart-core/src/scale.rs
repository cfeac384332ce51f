// File: crates/chart-core/src/scale.rs
// Summary: Value range padding and value -> row normalization for the text canvas.

use crate::types::RANGE_PADDING;

/// Value Y coordinate (e.g., price).
pub type Value = f64;

/// Padded (min, max) bounds shared by every series of one chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: Value,
    pub max: Value,
}

impl ValueRange {
    pub const fn new(min: Value, max: Value) -> Self {
        Self { min, max }
    }

    /// Raw bounds over every value of every series, or `None` when there are no values.
    pub fn raw<'a, I>(series: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [Value]>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut any = false;
        for values in series {
            for &v in values {
                min = min.min(v);
                max = max.max(v);
                any = true;
            }
        }
        any.then_some(Self { min, max })
    }

    /// Expand both bounds outward by `fraction` of the span. A flat range stays flat.
    pub fn padded(self, fraction: f64) -> Self {
        let pad = (self.max - self.min) * fraction;
        Self { min: self.min - pad, max: self.max + pad }
    }

    #[inline]
    pub fn span(&self) -> Value { self.max - self.min }

    #[inline]
    pub fn is_flat(&self) -> bool { self.max == self.min }
}

/// Raw range over all series, padded by 10% of its span.
pub fn compute_range<'a, I>(series: I) -> Option<ValueRange>
where
    I: IntoIterator<Item = &'a [Value]>,
{
    ValueRange::raw(series).map(|r| r.padded(RANGE_PADDING))
}

/// Map each value to a row in `[0, height - 1]`, 0 being the bottom.
/// A flat range maps everything to row 0.
pub fn normalize(values: &[Value], range: ValueRange, height: usize) -> Vec<usize> {
    let scale = ValueScale::new(range, height);
    values.iter().map(|&v| scale.to_row(v)).collect()
}

/// Vertical scale mapping a value range onto `rows` integer rows.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub range: ValueRange,
    pub rows: usize,
}

impl ValueScale {
    pub fn new(range: ValueRange, rows: usize) -> Self {
        Self { range, rows: rows.max(1) }
    }

    #[inline]
    fn top(&self) -> usize { self.rows - 1 }

    /// Row index counted from the bottom.
    pub fn to_row(&self, v: Value) -> usize {
        if self.range.is_flat() {
            return 0;
        }
        let t = (v - self.range.min) / self.range.span() * self.top() as f64;
        (t.round().max(0.0) as usize).min(self.top())
    }

    /// Value represented by canvas line `line` counted from the top (line 0 = max).
    /// Lines past the last plot row keep stepping down linearly.
    pub fn value_at_line(&self, line: usize) -> Value {
        let step = if self.top() == 0 { 0.0 } else { self.range.span() / self.top() as f64 };
        self.range.max - line as f64 * step
    }
}
