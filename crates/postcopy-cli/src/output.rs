//! Progress lines on stdout.
//!
//! Each step of a run reports through [`OutputManager`]; diagnostics go
//! through tracing to stderr instead. Errors are not printed here: they
//! surface once, from `handle_error`.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;

/// Leading glyph and colour of a progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Header,
    Info,
    Success,
    Warning,
}

impl Tone {
    fn render(self, msg: &str, color: bool) -> String {
        match (self, color) {
            (Self::Plain, _) => msg.to_owned(),
            (Self::Header, false) => msg.to_owned(),
            (Self::Header, true) => msg.cyan().bold().to_string(),
            (Self::Info, false) => format!("\u{2139} {msg}"),
            (Self::Info, true) => format!("{} {}", "\u{2139}".blue().bold(), msg.blue()),
            (Self::Success, false) => format!("\u{2713} {msg}"),
            (Self::Success, true) => format!("{} {}", "\u{2713}".green().bold(), msg.green()),
            (Self::Warning, false) => format!("\u{26a0} {msg}"),
            (Self::Warning, true) => format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow()),
        }
    }
}

pub struct OutputManager {
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// Colour needs a terminal on stdout and neither `--no-color` nor
    /// `NO_COLOR`; `--quiet` drops every line.
    pub fn new(args: &GlobalArgs) -> Self {
        Self {
            quiet: args.quiet,
            color: !args.no_color && io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(Tone::Header, text)
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Plain, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Info, msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Success, msg)
    }

    /// A skipped step the user should know about (e.g. no `pyproject.toml`).
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Warning, msg)
    }

    fn emit(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&tone.render(msg, self.color))
    }
}
