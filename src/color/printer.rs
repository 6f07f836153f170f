//! Colored terminal printer
//!
//! Writes token-formatted text (see [`substitute`]) to stdout/stderr and
//! tracks how many characters sit on the current line so that a later
//! [`Printer::clear_line`] can blank exactly that much.
//!
//! The counter tracks raw input characters, not the expanded output: escape
//! codes take no room on screen, while the token text itself is counted.
//! One printer is meant to be created at startup and passed to every call
//! site; it is not synchronized for concurrent writers.

use std::io::{self, IsTerminal, Stderr, Stdout, Write};

use anyhow::{bail, Context, Result};

use super::palette::substitute;
use super::trace::{format_trace, trace_text};
use crate::config::OutputConfig;
use crate::target::StatusTarget;

/// Errors whose message contains this never get a stack trace.
pub const NO_TARGETS_FOUND: &str = "No targets found";

/// Current width of the terminal attached to stdout.
///
/// Without a terminal this fails instead of guessing a width.
pub fn terminal_columns() -> Result<usize> {
    if !io::stdout().is_terminal() {
        bail!("stdout is not a terminal");
    }
    window_columns()
}

#[cfg(unix)]
fn window_columns() -> Result<usize> {
    // `terminal::size` falls back to `tput cols`, which reports 80 without a tty
    let size = crossterm::terminal::window_size().context("Terminal window size unavailable")?;
    Ok(usize::from(size.columns))
}

#[cfg(not(unix))]
fn window_columns() -> Result<usize> {
    let (columns, _rows) =
        crossterm::terminal::size().context("Terminal window size unavailable")?;
    Ok(usize::from(columns))
}

/// Token-aware printer over an output and an error stream
pub struct Printer<O = Stdout, E = Stderr> {
    out: O,
    err: E,
    sameline_len: usize,
}

impl Printer {
    /// Printer over the process stdout and stderr
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::stdio()
    }
}

impl<O: Write, E: Write> Printer<O, E> {
    /// Create a printer over arbitrary writers
    #[must_use]
    pub const fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            sameline_len: 0,
        }
    }

    /// Characters printed on the current line since the last reset
    #[must_use]
    pub const fn sameline_len(&self) -> usize {
        self.sameline_len
    }

    /// The output writer
    #[must_use]
    pub const fn stdout(&self) -> &O {
        &self.out
    }

    /// The error writer
    #[must_use]
    pub const fn stderr(&self) -> &E {
        &self.err
    }

    /// Consume the printer, returning its writers
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Print formatted text without a newline and flush immediately.
    ///
    /// If `text` contains a carriage return, only the part after the last one
    /// counts towards the line length; otherwise the whole text is added.
    pub fn print_same_line(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(substitute(text).as_bytes())
            .context("Failed to write to stdout")?;
        self.out.flush().context("Failed to flush stdout")?;

        self.sameline_len = match text.rfind('\r') {
            Some(idx) => text[idx + 1..].chars().count(),
            None => self.sameline_len + text.chars().count(),
        };
        Ok(())
    }

    /// Print formatted text followed by a newline
    pub fn print_line(&mut self, text: &str) -> Result<()> {
        self.print_same_line(&format!("{text}\n"))?;
        self.sameline_len = 0;
        Ok(())
    }

    /// Print text followed by a newline without expanding tokens
    pub fn print_raw_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").context("Failed to write to stdout")?;
        self.out.flush().context("Failed to flush stdout")?;
        self.sameline_len = 0;
        Ok(())
    }

    /// Print formatted text followed by a newline to the error stream
    pub fn print_error(&mut self, text: &str) -> Result<()> {
        self.err
            .write_all(substitute(&format!("{text}\n")).as_bytes())
            .context("Failed to write to stderr")?;
        self.sameline_len = 0;
        Ok(())
    }

    /// Blank out whatever was printed on the current line
    pub fn clear_line(&mut self) -> Result<()> {
        let spaces = " ".repeat(self.sameline_len);
        write!(self.out, "\r{spaces}\r").context("Failed to write to stdout")?;
        self.out.flush().context("Failed to flush stdout")?;
        self.sameline_len = 0;
        Ok(())
    }

    /// Blank the whole terminal row, whatever its tracked length.
    ///
    /// Fails when stdout is not a terminal or its width cannot be read.
    pub fn clear_entire_line(&mut self) -> Result<()> {
        self.clear_entire_line_with(terminal_columns)
    }

    /// Blank the whole row, taking the width from `columns`
    pub fn clear_entire_line_with<F>(&mut self, columns: F) -> Result<()>
    where
        F: FnOnce() -> Result<usize>,
    {
        let width = columns().context("Failed to query terminal width")?;
        if width == 0 {
            bail!("Failed to query terminal width: terminal reports zero columns");
        }
        self.clear_columns(width)
    }

    /// Blank `width` columns of the current row
    pub fn clear_columns(&mut self, width: usize) -> Result<()> {
        self.print_same_line(&format!("\r{}\r", " ".repeat(width)))
    }

    /// Overwrite the current line with a one-line attack progress report.
    ///
    /// e.g. `[+] Router2G (23db) WEP replay attack: 102 IVs`
    pub fn print_attack_status<T: StatusTarget + ?Sized>(
        &mut self,
        attack_type: &str,
        target: &T,
        attack_name: &str,
        progress: &str,
    ) -> Result<()> {
        let name = if target.name_known() {
            format!("{{C}}{}{{W}}", target.display_name())
        } else {
            "{O}unknown{W}".to_string()
        };
        let power = target.power();
        self.print_same_line(&format!(
            "\r{{+}} {{G}}{name}{{W}} ({{B}}{power}db{{W}}) {{M}}{attack_type} {{C}}{attack_name}{{W}}: {progress} "
        ))
    }

    /// Print an error, followed by its stack trace when the config asks for one
    pub fn print_exception(&mut self, err: &anyhow::Error, config: &OutputConfig) -> Result<()> {
        let message = err.to_string();
        self.print_line(&format!("\n{{!}} {{R}}Error: {{O}}{message}"))?;

        if message.contains(NO_TARGETS_FOUND) {
            return Ok(());
        }

        if config.wants_stack_trace() {
            self.print_line("\n{!} {Y}Full stack trace below")?;
            self.print_same_line("\n{!}    ")?;
            self.print_line(&format_trace(&trace_text(err)))?;
        }
        Ok(())
    }
}
