// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end render of four OHLC series; every line shares the declared width.

use chart_core::series::{parse_timestamp, Quote};
use chart_core::types::LABEL_MARGIN;
use chart_core::{Chart, GlyphMap, RenderOptions, Summary, Theme};

fn quotes() -> Vec<Quote> {
    let rows = [
        ("2024-03-01 15:40:00", 101.0, 103.5, 100.2, 102.8),
        ("2024-03-01 15:45:00", 102.8, 104.0, 101.9, 103.1),
        ("2024-03-01 15:50:00", 103.1, 103.3, 98.7, 99.4),
        ("2024-03-01 15:55:00", 99.4, 101.2, 99.0, 100.9),
        ("2024-03-01 16:00:00", 100.9, 105.6, 100.5, 105.2),
    ];
    rows.iter()
        .map(|&(ts, open, high, low, close)| Quote {
            timestamp: parse_timestamp(ts).unwrap(),
            open,
            high,
            low,
            close,
        })
        .collect()
}

#[test]
fn render_smoke_text() {
    let chart = Chart::from_quotes(&quotes());
    let out = chart
        .render(&GlyphMap::standard(), &RenderOptions::default())
        .expect("render should succeed");

    let declared = 5 * 3 + LABEL_MARGIN;
    assert_eq!(out.width(), declared);

    let text = out.to_plain_string();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines.iter().all(|l| l.chars().count() == declared), "ragged line in:\n{text}");

    // border + title + legend + blank + 21 canvas lines + separator + times + border
    assert_eq!(lines.len(), 4 + 21 + 3);
    assert_eq!(lines.iter().filter(|l| l.starts_with('╰')).count(), 1);
    assert!(lines[0].starts_with('╭') && lines[0].ends_with('╮'));
    assert!(lines[1].contains("✧ Price Chart ✧"));

    // every point of every series is on the canvas (some may share a cell)
    let plotted: usize = lines[4..25].iter().map(|l| l.matches(|c: char| matches!(c, '⬤' | '◯' | '△' | '▽')).count()).sum();
    assert!(plotted >= 5 && plotted <= 20);
    assert!(lines[26].contains("15:40") && lines[26].contains("15:50") && lines[26].contains("16:00"));
}

#[test]
fn padded_range_reaches_top_label() {
    let chart = Chart::from_quotes(&quotes());
    let out = chart.render(&GlyphMap::standard(), &RenderOptions::default()).unwrap();
    // raw range 98.7..105.6 padded by 0.69 each side
    assert!((out.range.min - 98.01).abs() < 1e-9);
    assert!((out.range.max - 106.29).abs() < 1e-9);
    let text = out.to_plain_string();
    assert!(text.lines().nth(4).unwrap().contains("  106.29"));
    assert!(text.lines().nth(4 + 19).unwrap().contains("   98.01"));
}

#[test]
fn summary_and_chart_paint_cleanly() {
    let q = quotes();
    let latest = q.last().unwrap();
    let summary = Summary::new("ibm", latest).render();
    assert!(summary.to_plain_string().contains("◆ Close: 105.20"));

    let chart = Chart::from_quotes(&q).render(&GlyphMap::standard(), &RenderOptions::default()).unwrap();
    assert_eq!(Theme::mono().paint(&chart.block), chart.to_plain_string());
}
