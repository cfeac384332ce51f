// File: crates/chart-core/src/summary.rs
// Summary: Bordered summary box for the latest quote (values, change vs open).

use crate::series::{Quote, TIMESTAMP_FORMAT};
use crate::text::{cell_width, Block, TextRow, Tone};
use crate::types::SUMMARY_WIDTH;

/// `1234567.891` -> `1,234,567.89`.
pub fn format_price(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*d);
    }
    let sign = if value < 0.0 && fixed.bytes().any(|b| b != b'0' && b != b'.') { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}

pub struct Summary<'a> {
    pub symbol: &'a str,
    pub latest: &'a Quote,
}

impl<'a> Summary<'a> {
    pub fn new(symbol: &'a str, latest: &'a Quote) -> Self {
        Self { symbol, latest }
    }

    pub fn render(&self) -> Block {
        let q = self.latest;
        let (delta, pct) = q.change();
        let rising = delta >= 0.0;

        let title = format!("✧ ✦ {} ✦ ✧", self.symbol.to_uppercase());
        let updated = q.timestamp.format(TIMESTAMP_FORMAT).to_string();
        let entries: [(&str, String, Tone); 6] = [
            (" ⌚ Latest Update: ", updated, Tone::Plain),
            (" ▲ Open:  ", format_price(q.open), Tone::Up),
            (" ⬆ High:  ", format_price(q.high), Tone::Up),
            (" ⬇ Low:   ", format_price(q.low), Tone::Down),
            (" ◆ Close: ", format_price(q.close), Tone::Plot),
            (
                if rising { " 🡅 Change: " } else { " 🡇 Change: " },
                format!("{:.2} ({:.2}%)", delta.abs(), pct),
                if rising { Tone::Up } else { Tone::Down },
            ),
        ];

        let width = entries
            .iter()
            .map(|(label, value, _)| cell_width(label) + cell_width(value) + 2)
            .chain(std::iter::once(cell_width(&title) + 4))
            .fold(SUMMARY_WIDTH, usize::max);

        let mut block = Block::new();
        block.push(TextRow::rule(width, '╭', '─', '╮'));
        let mut head = TextRow::framed(width, '│', '│');
        head.write_centered(&title, Tone::Label);
        block.push(head);
        for (label, value, tone) in &entries {
            let mut row = TextRow::framed(width, '│', '│');
            let col = row.write(1, label, Tone::Plain);
            row.write(col, value, *tone);
            block.push(row);
        }
        block.push(TextRow::rule(width, '╰', '─', '╯'));
        block
    }
}
