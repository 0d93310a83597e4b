use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};
use unicode_width::UnicodeWidthChar;

use crate::models::{Citation, QueryResponse};
use crate::page::View;

/// Scales prefix for the interactive prompt
const SCALES: &str = "⚖";

pub const TITLE: &str = "Westeros Law Query System";
pub const TAGLINE: &str =
    "Ask questions about laws of Westeros and get AI-powered answers with citations.";
pub const PLACEHOLDER: &str = "What happens if I steal from the Sept?";
pub const LOADING_MESSAGE: &str = "Searching through Westeros laws...";

const DEFAULT_WIDTH: usize = 80;
const MAX_WIDTH: usize = 100;

/// Width to wrap card text at, clamped so wide terminals stay readable.
pub fn detect_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| usize::from(w))
        .unwrap_or(DEFAULT_WIDTH)
        .clamp(40, MAX_WIDTH)
}

/// Greedy word wrap by display width. Words wider than `width` get a line
/// of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width: usize = word.chars().filter_map(|c| c.width()).sum();
            if line_width > 0 && line_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

pub struct Printer<W: Write> {
    out: W,
    color: bool,
    width: usize,
}

impl Printer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        let color = color && io::stdout().is_terminal();
        Self::new(io::stdout(), color, detect_width())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, color: bool, width: usize) -> Self {
        Self { out, color, width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self) -> io::Result<()> {
        let rule = "═".repeat(self.width.min(60));
        writeln!(self.out)?;
        if self.color {
            writeln!(self.out, "{}", rule.bright_purple())?;
            writeln!(self.out, "{}  {}", SCALES, TITLE.bright_purple().bold())?;
            writeln!(self.out, "{}", rule.bright_purple())?;
        } else {
            writeln!(self.out, "{}", rule)?;
            writeln!(self.out, "{}  {}", SCALES, TITLE)?;
            writeln!(self.out, "{}", rule)?;
        }
        writeln!(self.out, "{}", TAGLINE)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Print the input prompt, with the placeholder as a hint.
    pub fn prompt(&mut self, label: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", format!("e.g. {}", PLACEHOLDER).dimmed())?;
            write!(self.out, "{} {} ", SCALES, format!("{}>", label).purple().bold())?;
        } else {
            writeln!(self.out, "e.g. {}", PLACEHOLDER)?;
            write!(self.out, "{} {}> ", SCALES, label)?;
        }
        self.out.flush()
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn page(&mut self, view: &View<'_>) -> io::Result<()> {
        if let Some(error) = view.error {
            self.error_box(error)?;
        }
        if view.loading {
            writeln!(self.out, "{}", LOADING_MESSAGE)?;
        }
        if let Some(result) = view.result {
            self.result(result)?;
        }
        self.out.flush()
    }

    pub fn error_box(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out)?;
        for line in wrap(message, self.width.saturating_sub(4)) {
            if self.color {
                writeln!(self.out, "{} {}", "✖".red().bold(), line.red())?;
            } else {
                writeln!(self.out, "! {}", line)?;
            }
        }
        Ok(())
    }

    pub fn result(&mut self, result: &QueryResponse) -> io::Result<()> {
        self.card("Your Query", |p| p.text(&result.query))?;
        self.card("Response", |p| p.text(&result.response))?;
        if !result.citations.is_empty() {
            self.card("Citations", |p| {
                for (index, citation) in result.citations.iter().enumerate() {
                    if index > 0 {
                        writeln!(p.out)?;
                    }
                    p.citation(citation)?;
                }
                Ok(())
            })?;
        }
        Ok(())
    }

    pub fn json(&mut self, result: &QueryResponse) -> io::Result<()> {
        let body = serde_json::to_string_pretty(result).map_err(io::Error::other)?;
        writeln!(self.out, "{}", body)?;
        self.out.flush()
    }

    fn card<F>(&mut self, heading: &str, body: F) -> io::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        writeln!(self.out)?;
        if self.color {
            writeln!(
                self.out,
                "{}  {}",
                "─".repeat(3).bright_white().dimmed(),
                heading.bright_white().bold()
            )?;
        } else {
            writeln!(self.out, "───  {}", heading)?;
        }
        body(self)
    }

    fn citation(&mut self, citation: &Citation) -> io::Result<()> {
        let inner = self.width.saturating_sub(4);
        if self.color {
            writeln!(self.out, "  {}", citation.source.bold())?;
            writeln!(self.out, "  {}", "─".repeat(inner.min(40)).dimmed())?;
        } else {
            writeln!(self.out, "  {}", citation.source)?;
            writeln!(self.out, "  {}", "─".repeat(inner.min(40)))?;
        }
        for line in wrap(&citation.text, inner) {
            writeln!(self.out, "  {}", line)?;
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> io::Result<()> {
        for line in wrap(text, self.width.saturating_sub(2)) {
            writeln!(self.out, "  {}", line)?;
        }
        Ok(())
    }
}

/// Loading indicator shown while a request is in flight.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn start() -> Self {
        if !io::stderr().is_terminal() {
            eprintln!("{}", LOADING_MESSAGE);
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.magenta} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(LOADING_MESSAGE);
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    pub fn stop(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
