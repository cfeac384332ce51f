// File: crates/chart-examples/src/bin/quotes.rs
// Summary: Minimal offline example that renders a summary box and OHLC chart to stdout.

use chart_core::series::Quote;
use chart_core::{Chart, GlyphMap, RenderOptions, Summary, Theme};
use chrono::{Duration, NaiveDate};

fn main() {
    // Fifteen synthetic 5-minute bars
    let start = NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(14, 50, 0))
        .expect("valid start time");
    let mut price = 187.4;
    let quotes: Vec<Quote> = (0..15)
        .map(|i| {
            let open = price;
            let close = open + ((i as f64) * 0.9).sin() * 0.8;
            price = close;
            Quote {
                timestamp: start + Duration::minutes(5 * i),
                open,
                high: open.max(close) + 0.35,
                low: open.min(close) - 0.3,
                close,
            }
        })
        .collect();

    let theme = Theme::dark();
    let latest = quotes.last().expect("non-empty");
    println!("{}", theme.paint(&Summary::new("DEMO", latest).render()));
    println!();

    let chart = Chart::from_quotes(&quotes)
        .render(&GlyphMap::standard(), &RenderOptions::default())
        .expect("render chart");
    println!("{}", theme.paint(&chart.block));
}
