//! Output configuration
//!
//! Controls how much detail the printer adds when reporting errors.
//! Parsed from a small TOML file; every field is optional.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Verbosity settings consulted when printing errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Verbosity level (0 = quiet)
    #[serde(default)]
    pub verbose: u8,
    /// Always print stack traces, regardless of verbosity
    #[serde(default)]
    pub print_stack_traces: bool,
}

impl OutputConfig {
    /// Parse a config file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse config content from a string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse output config")
    }

    /// Whether errors should be followed by a stack trace
    #[must_use]
    pub const fn wants_stack_trace(&self) -> bool {
        self.verbose > 0 || self.print_stack_traces
    }
}
