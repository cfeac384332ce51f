// Offline session: CSV source through the prompt loop.

use chart_core::Theme;
use stock_cli::shell::Shell;
use stock_cli::source::{CsvSource, QuoteSource, MAX_POINTS};

fn write_fixture(name: &str) -> std::path::PathBuf {
    let mut csv = String::from("timestamp,open,high,low,close,symbol\n");
    for i in 0..20 {
        let minute = i * 5;
        let open = 140.0 + (i as f64 * 0.7).sin();
        let close = open + 0.25;
        csv.push_str(&format!(
            "2024-03-01 {:02}:{:02}:00,{open:.2},{:.2},{:.2},{close:.2},IBM\n",
            14 + minute / 60,
            minute % 60,
            close + 0.5,
            open - 0.5,
        ));
    }
    let path = std::env::temp_dir().join(format!("{name}-{}.csv", std::process::id()));
    std::fs::write(&path, csv).unwrap();
    path
}

#[test]
fn csv_source_windows_to_latest_points() {
    let path = write_fixture("stock-cli-window");
    let quotes = CsvSource::new(&path).fetch("IBM").unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(quotes.len(), MAX_POINTS);
    assert_eq!(quotes[0].timestamp.format("%H:%M").to_string(), "14:25");
    assert_eq!(quotes[MAX_POINTS - 1].timestamp.format("%H:%M").to_string(), "15:35");
}

#[test]
fn prompt_session_renders_chart_then_exits() {
    let path = write_fixture("stock-cli-session");
    let source = CsvSource::new(&path);
    let shell = Shell::new(&source, Theme::mono()).without_clear();
    let mut out = Vec::new();
    shell.run("ibm\nmsft\n".as_bytes(), &mut out).unwrap();
    std::fs::remove_file(&path).ok();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("✦ IBM ✦"));
    assert!(text.contains("Legend: ◯ Open △ High ▽ Low ⬤ Close"));
    assert!(text.contains("⚠ symbol not found: MSFT"));
    assert!(text.contains("👋 Goodbye!"));

    // chart rows are rectangular: every framed chart line has the same width
    let chart_lines: Vec<&str> = text
        .lines()
        .skip_while(|l| !l.contains("Price Chart"))
        .take_while(|l| !l.starts_with('╰'))
        .collect();
    let w = chart_lines[0].chars().count();
    assert_eq!(w, MAX_POINTS * 3 + 30);
    assert!(chart_lines.iter().all(|l| l.chars().count() == w));
}
