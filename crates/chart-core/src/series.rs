// File: crates/chart-core/src/series.rs
// Summary: Named value series and the OHLC quote records they are split from.

use chrono::NaiveDateTime;

/// Timestamp layout used by quote sources.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Role names of the four standard price series, in legend order.
pub const OPEN: &str = "open";
pub const HIGH: &str = "high";
pub const LOW: &str = "low";
pub const CLOSE: &str = "close";

pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
}

/// One sampled interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quote {
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Quote {
    /// Check OHLC invariants:
    /// low <= min(open,close), high >= max(open,close), and low <= high.
    pub fn check(&self) -> Result<(), &'static str> {
        if self.low > self.open.min(self.close) { return Err("low above min(open,close)"); }
        if self.high < self.open.max(self.close) { return Err("high below max(open,close)"); }
        if self.low > self.high { return Err("low above high"); }
        Ok(())
    }

    /// Close minus open, and that change as a percentage of open (0 when open is 0).
    pub fn change(&self) -> (f64, f64) {
        let delta = self.close - self.open;
        let pct = if self.open == 0.0 { 0.0 } else { delta / self.open * 100.0 };
        (delta, pct)
    }
}

/// A named sequence of values aligned by index to the chart's timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values }
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Name with its first letter upper-cased and the rest lower-cased ("close" -> "Close").
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }
}

/// Split quotes into open/high/low/close series plus the shared timestamp axis.
pub fn split_quotes(quotes: &[Quote]) -> (Vec<Series>, Vec<NaiveDateTime>) {
    fn pick(quotes: &[Quote], f: impl Fn(&Quote) -> f64) -> Vec<f64> {
        quotes.iter().map(f).collect()
    }
    let series = vec![
        Series::new(OPEN, pick(quotes, |q| q.open)),
        Series::new(HIGH, pick(quotes, |q| q.high)),
        Series::new(LOW, pick(quotes, |q| q.low)),
        Series::new(CLOSE, pick(quotes, |q| q.close)),
    ];
    let timestamps = quotes.iter().map(|q| q.timestamp).collect();
    (series, timestamps)
}
