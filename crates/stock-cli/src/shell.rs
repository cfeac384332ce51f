//! Interactive prompt loop.

use std::io::{self, BufRead, Write};

use chart_core::{GlyphMap, Theme};
use crossterm::cursor::MoveTo;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use tracing::{error, info};

use crate::display;
use crate::source::QuoteSource;

const PROMPT: &str = "⮞ Stock Symbol: ";

pub struct Shell<'a> {
    source: &'a dyn QuoteSource,
    glyphs: GlyphMap,
    theme: Theme,
    clear_screen: bool,
}

impl<'a> Shell<'a> {
    pub fn new(source: &'a dyn QuoteSource, theme: Theme) -> Self {
        Self { source, glyphs: GlyphMap::standard(), theme, clear_screen: true }
    }

    /// Skip the clear-screen escape before each chart (non-terminal output).
    pub fn without_clear(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    /// Prompt until end of input. Fetch or render failures are reported and the loop continues.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n{}", self.theme.paint(&display::banner()))?;
        writeln!(out, "\n{}", display::START_HINT)?;

        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out, "\n👋 Goodbye!")?;
                return Ok(());
            }
            let symbol = line.trim().to_uppercase();
            if symbol.is_empty() {
                continue;
            }
            self.show(&symbol, out)?;
        }
    }

    /// Fetch and print one symbol. Only output errors are returned.
    pub fn show<W: Write>(&self, symbol: &str, out: &mut W) -> io::Result<()> {
        let quotes = match self.source.fetch(symbol) {
            Ok(q) => q,
            Err(e) => {
                error!(symbol, source = self.source.name(), error = %e, "quote fetch failed");
                return self.warn(out, &e.to_string());
            }
        };
        info!(symbol, count = quotes.len(), "rendering chart");
        match display::screen(symbol, &quotes, &self.glyphs, &self.theme) {
            Ok(text) => {
                if self.clear_screen {
                    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
                }
                write!(out, "{text}")?;
                out.flush()
            }
            Err(e) => {
                error!(symbol, error = %e, "chart rendering failed");
                self.warn(out, &e.to_string())
            }
        }
    }

    fn warn<W: Write>(&self, out: &mut W, msg: &str) -> io::Result<()> {
        let line = format!("⚠ {msg}");
        match self.theme.down {
            Some(color) => writeln!(out, "{}", line.with(color)),
            None => writeln!(out, "{line}"),
        }
    }
}
