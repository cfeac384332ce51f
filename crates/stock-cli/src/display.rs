//! Screen composition: banner, summary + chart, and the commands help box.

use chart_core::text::{cell_width, TextRow};
use chart_core::{Block, Chart, ChartError, GlyphMap, Quote, RenderOptions, Summary, Theme, Tone};

const BANNER_TITLE: &str = "✧ Stock Market Monitor CLI ✧";
pub const START_HINT: &str = "⌨  Enter a stock symbol to begin (Ctrl+D to exit)";
const COMMANDS: [&str; 2] = ["⌨  Enter a new stock symbol to view different stock", "⌃D Press Ctrl+D to exit"];

/// Title box printed once at startup.
pub fn banner() -> Block {
    let width = cell_width(BANNER_TITLE) + 4;
    let mut block = Block::new();
    block.push(TextRow::rule(width, '╭', '─', '╮'));
    let mut row = TextRow::framed(width, '│', '│');
    row.write(2, BANNER_TITLE, Tone::Label);
    block.push(row);
    block.push(TextRow::rule(width, '╰', '─', '╯'));
    block
}

/// Help box listing the shell commands.
pub fn commands_box() -> Block {
    let width = COMMANDS.iter().map(|c| cell_width(c)).max().unwrap_or(0) + 3;
    let mut block = Block::new();
    let mut top = TextRow::rule(width, '╭', '─', '╮');
    top.write(2, " Commands ", Tone::Label);
    block.push(top);
    for cmd in COMMANDS {
        let mut row = TextRow::framed(width, '│', '│');
        row.write(2, cmd, Tone::Plain);
        block.push(row);
    }
    block.push(TextRow::rule(width, '╰', '─', '╯'));
    block
}

/// Full screen for one symbol: summary of the latest bar, the chart, the help box.
pub fn screen(symbol: &str, quotes: &[Quote], glyphs: &GlyphMap, theme: &Theme) -> Result<String, ChartError> {
    let latest = quotes.last().ok_or(ChartError::Empty)?;
    let chart = Chart::from_quotes(quotes).render(glyphs, &RenderOptions::default())?;
    let summary = Summary::new(symbol, latest).render();
    Ok(format!(
        "\n{}\n\n{}\n\n{}\n",
        theme.paint(&summary),
        theme.paint(&chart.block),
        theme.paint(&commands_box()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::series::parse_timestamp;

    #[test]
    fn boxes_are_rectangular() {
        for block in [banner(), commands_box()] {
            let w = block.width();
            assert!(block.lines().all(|l| l.chars().count() == w));
        }
        assert!(banner().to_plain_string().contains("│ ✧ Stock Market Monitor CLI ✧ │"));
        assert!(commands_box().rows[0].to_plain().starts_with("╭─ Commands ─"));
    }

    #[test]
    fn screen_has_summary_chart_and_help() {
        let base = parse_timestamp("2024-03-01 15:55:00").unwrap();
        let quotes: Vec<Quote> = (0..3)
            .map(|i| Quote {
                timestamp: base + chrono::Duration::minutes(5 * i),
                open: 50.0,
                high: 52.0,
                low: 49.0,
                close: 51.0 + i as f64,
            })
            .collect();
        let text = screen("ibm", &quotes, &GlyphMap::standard(), &Theme::mono()).unwrap();
        assert!(text.contains("✦ IBM ✦"));
        assert!(text.contains("Latest Update: 2024-03-01 16:05:00"));
        assert!(text.contains("✧ Price Chart ✧"));
        assert!(text.contains("Press Ctrl+D to exit"));
    }

    #[test]
    fn empty_quotes_do_not_render() {
        let err = screen("IBM", &[], &GlyphMap::standard(), &Theme::mono()).unwrap_err();
        assert_eq!(err, ChartError::Empty);
    }
}
