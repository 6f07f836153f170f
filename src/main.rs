//! Termtint - token-based terminal coloring
//!
//! CLI entry point: renders token-formatted text, status lines and the
//! token tables.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;

use termtint::cli::{render_token_json, render_token_table, token_entries, DEMO_LINES};
use termtint::{OutputConfig, Printer, Target};

/// Token-based terminal coloring
///
/// Expands `{R}`-style color tokens and `{+}`-style status glyphs into
/// ANSI escape sequences.
#[derive(Parser, Debug)]
#[command(name = "termtint", version, about)]
struct Cli {
    /// Path to an output config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity (repeatable); any level shows stack traces on errors
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Always print stack traces on errors
    #[arg(long, global = true)]
    stack_traces: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expand tokens in each TEXT and print it
    Render {
        /// Token-formatted text
        #[arg(required = true)]
        text: Vec<String>,

        /// Do not end lines with a newline
        #[arg(long)]
        same_line: bool,

        /// Print to stderr instead of stdout
        #[arg(long, conflicts_with = "same_line")]
        stderr: bool,
    },
    /// Print sample lines using every color and glyph
    Demo,
    /// Print a one-line attack status
    Status {
        /// Target name; omit for a target with a hidden name
        #[arg(long)]
        name: Option<String>,

        /// Signal power in dB
        #[arg(long, allow_hyphen_values = true)]
        power: i32,

        /// Attack type label (e.g. WPA)
        #[arg(long)]
        attack_type: String,

        /// Attack name (e.g. "handshake capture")
        #[arg(long)]
        attack_name: String,

        /// Free-form progress text
        #[arg(long, default_value = "")]
        progress: String,
    },
    /// List every color token and glyph
    Tokens {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Erase the current terminal line
    Clear {
        /// Blank the full terminal width
        #[arg(long)]
        entire: bool,
    },
}

/// Load the config file (if any) and apply command-line overrides.
fn load_config(path: Option<&Path>, verbose: u8, stack_traces: bool) -> Result<OutputConfig> {
    let mut config = match path {
        Some(path) => OutputConfig::from_path(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display()))?,
        None => OutputConfig::default(),
    };
    config.verbose = config.verbose.saturating_add(verbose);
    if stack_traces {
        config.print_stack_traces = true;
    }
    Ok(config)
}

/// Text printed by `termtint tokens`.
fn tokens_output(json: bool) -> Result<String> {
    let entries = token_entries();
    if json {
        render_token_json(&entries)
    } else {
        Ok(render_token_table(&entries))
    }
}

/// Execute a subcommand against the given printer.
fn run<O: Write, E: Write>(command: &Command, printer: &mut Printer<O, E>) -> Result<()> {
    match command {
        Command::Render {
            text,
            same_line,
            stderr,
        } => {
            for line in text {
                if *same_line {
                    printer.print_same_line(line)?;
                } else if *stderr {
                    printer.print_error(line)?;
                } else {
                    printer.print_line(line)?;
                }
            }
        }
        Command::Demo => {
            for line in DEMO_LINES {
                printer.print_line(line)?;
            }
        }
        Command::Status {
            name,
            power,
            attack_type,
            attack_name,
            progress,
        } => {
            let target = name
                .as_deref()
                .map_or_else(|| Target::hidden(*power), |n| Target::new(n, *power));
            printer.print_attack_status(attack_type, &target, attack_name, progress)?;
            printer.print_line("")?;
        }
        Command::Tokens { json } => {
            printer.print_raw_line(&tokens_output(*json)?)?;
        }
        Command::Clear { entire } => {
            if *entire {
                printer.clear_entire_line()?;
            } else {
                printer.clear_line()?;
            }
        }
    }
    Ok(())
}

/// Report an error through the printer, falling back to plain stderr.
fn report<O: Write, E: Write>(printer: &mut Printer<O, E>, err: &anyhow::Error, config: &OutputConfig) {
    if printer.print_exception(err, config).is_err() {
        eprintln!("{} {err:#}", "Error:".red().bold());
    }
}

fn main() {
    let cli = Cli::parse();
    let mut printer = Printer::stdio();

    let config = match load_config(cli.config.as_deref(), cli.verbose, cli.stack_traces) {
        Ok(config) => config,
        Err(err) => {
            report(&mut printer, &err, &OutputConfig::default());
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&cli.command, &mut printer) {
        report(&mut printer, &err, &config);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn buffer_printer() -> Printer<Vec<u8>, Vec<u8>> {
        Printer::new(Vec::new(), Vec::new())
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from(["termtint", "render", "{G}ok", "--same-line"]).unwrap();
        match cli.command {
            Command::Render {
                text, same_line, ..
            } => {
                assert_eq!(text, vec!["{G}ok"]);
                assert!(same_line);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_counts_verbose_flags() {
        let cli = Cli::try_parse_from(["termtint", "-vv", "demo"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_accepts_negative_power() {
        let cli = Cli::try_parse_from([
            "termtint",
            "status",
            "--power",
            "-42",
            "--attack-type",
            "WPA",
            "--attack-name",
            "handshake",
        ])
        .unwrap();
        match cli.command {
            Command::Status { power, name, .. } => {
                assert_eq!(power, -42);
                assert!(name.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_same_line_with_stderr() {
        let result = Cli::try_parse_from(["termtint", "render", "x", "--same-line", "--stderr"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None, 0, false).unwrap();
        assert_eq!(config, OutputConfig::default());
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("termtint.toml");
        std::fs::write(&path, "verbose = 1\n").unwrap();

        let config = load_config(Some(&path), 2, true).unwrap();
        assert_eq!(config.verbose, 3);
        assert!(config.print_stack_traces);
    }

    #[test]
    fn test_load_config_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.toml");
        let err = load_config(Some(&path), 0, false).unwrap_err();
        assert!(err.to_string().contains("Failed to load config from"));
    }

    #[test]
    fn test_run_render_lines() {
        let mut printer = buffer_printer();
        let command = Command::Render {
            text: vec!["{R}a".to_string(), "b".to_string()],
            same_line: false,
            stderr: false,
        };
        run(&command, &mut printer).unwrap();

        let (out, err) = printer.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[91ma\nb\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_render_same_line_tracks_length() {
        let mut printer = buffer_printer();
        let command = Command::Render {
            text: vec!["ab".to_string(), "cd".to_string()],
            same_line: true,
            stderr: false,
        };
        run(&command, &mut printer).unwrap();
        assert_eq!(printer.sameline_len(), 4);
    }

    #[test]
    fn test_run_render_to_stderr() {
        let mut printer = buffer_printer();
        let command = Command::Render {
            text: vec!["{!} oops".to_string()],
            same_line: false,
            stderr: true,
        };
        run(&command, &mut printer).unwrap();

        let (out, err) = printer.into_parts();
        assert!(out.is_empty());
        assert!(String::from_utf8(err).unwrap().ends_with(" oops\n"));
    }

    #[test]
    fn test_run_status_ends_line() {
        let mut printer = buffer_printer();
        let command = Command::Status {
            name: Some("Router2G".to_string()),
            power: 23,
            attack_type: "WEP".to_string(),
            attack_name: "replay".to_string(),
            progress: "102 IVs".to_string(),
        };
        run(&command, &mut printer).unwrap();

        assert_eq!(printer.sameline_len(), 0);
        let out = String::from_utf8(printer.into_parts().0).unwrap();
        assert!(out.contains("Router2G"));
        assert!(out.contains("23db"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_run_demo_prints_every_line() {
        let mut printer = buffer_printer();
        run(&Command::Demo, &mut printer).unwrap();
        let out = String::from_utf8(printer.into_parts().0).unwrap();
        assert_eq!(out.lines().count(), DEMO_LINES.len());
        assert!(!out.contains('{'));
    }

    #[test]
    fn test_tokens_output_json() {
        let json = tokens_output(true).unwrap();
        assert!(json.trim_start().starts_with('['));
        assert!(json.contains("\"{GR}\""));
    }

    #[test]
    fn test_run_tokens_writes_through_printer() {
        let mut printer = buffer_printer();
        run(&Command::Tokens { json: true }, &mut printer).unwrap();

        let out = String::from_utf8(printer.into_parts().0).unwrap();
        assert!(out.contains("\"{R}\""));
        assert!(out.ends_with("]\n"));
    }

    #[test]
    fn test_run_tokens_closed_pipe_is_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut printer = Printer::new(Closed, Vec::new());
        let err = run(&Command::Tokens { json: false }, &mut printer).unwrap_err();
        assert!(err.to_string().contains("Failed to write to stdout"));
    }

    #[test]
    fn test_report_prints_error() {
        let mut printer = buffer_printer();
        report(
            &mut printer,
            &anyhow::anyhow!("capture failed"),
            &OutputConfig::default(),
        );
        let out = String::from_utf8(printer.into_parts().0).unwrap();
        assert!(out.contains("capture failed"));
    }
}
