// File: crates/chart-core/src/theme.rs
// Summary: Terminal color themes; painting decorates cell tones without touching characters.

use crossterm::style::{Color, Stylize};

use crate::text::{Block, Tone};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub frame: Option<Color>,
    pub plot: Option<Color>,
    pub label: Option<Color>,
    pub up: Option<Color>,
    pub down: Option<Color>,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            frame: Some(Color::Cyan),
            plot: Some(Color::Yellow),
            label: Some(Color::Cyan),
            up: Some(Color::Green),
            down: Some(Color::Red),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            frame: Some(Color::DarkBlue),
            plot: Some(Color::DarkMagenta),
            label: Some(Color::DarkBlue),
            up: Some(Color::DarkGreen),
            down: Some(Color::DarkRed),
        }
    }

    /// No escape codes at all.
    pub fn mono() -> Self {
        Self { name: "mono", frame: None, plot: None, label: None, up: None, down: None }
    }

    pub fn color(&self, tone: Tone) -> Option<Color> {
        match tone {
            Tone::Plain => None,
            Tone::Frame => self.frame,
            Tone::Plot => self.plot,
            Tone::Label => self.label,
            Tone::Up => self.up,
            Tone::Down => self.down,
        }
    }

    /// Render `block` with each same-tone run wrapped in its color.
    pub fn paint(&self, block: &Block) -> String {
        let mut out = Vec::with_capacity(block.rows.len());
        for row in &block.rows {
            let mut line = String::new();
            let mut run = String::new();
            let mut run_tone = None;
            for cell in row.cells() {
                if run_tone != Some(cell.tone) {
                    if let Some(tone) = run_tone {
                        self.push_run(&mut line, &run, tone);
                    }
                    run.clear();
                    run_tone = Some(cell.tone);
                }
                run.push(cell.ch);
            }
            if let Some(tone) = run_tone {
                self.push_run(&mut line, &run, tone);
            }
            out.push(line);
        }
        out.join("\n")
    }

    fn push_run(&self, line: &mut String, run: &str, tone: Tone) {
        match self.color(tone) {
            Some(color) if !run.trim().is_empty() => line.push_str(&run.with(color).to_string()),
            _ => line.push_str(run),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::mono()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
