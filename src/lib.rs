//! Termtint - token-based terminal coloring
//!
//! Expands short `{KEY}` color tokens and `{+}`-style status glyphs into
//! ANSI escape sequences, and prints them through a [`Printer`] that keeps
//! track of the current line so status lines can be overwritten and erased.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod color;
pub mod config;
pub mod target;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use color::printer::{Printer, NO_TARGETS_FOUND};
pub use color::substitute;
pub use config::OutputConfig;
pub use target::{StatusTarget, Target};
