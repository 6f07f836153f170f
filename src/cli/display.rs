//! Token table display
//!
//! Renders the color and glyph tables for `termtint tokens`. The table
//! header uses `colored`; the sample column goes through [`substitute`].

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::color::{substitute, COLORS, GLYPHS};

/// Lines printed by `termtint demo`
pub const DEMO_LINES: &[&str] = &[
    "{R}Testing {G}Green {C}Cyan {P}Purple {Y}Yellow {B}Blue {W}Done",
    "{C}Testing {P}String {M}With Magenta {W}",
    "{+} Good line",
    "{!} Danger",
    "{*} Info Message",
    "{-} Warning Message",
    "{?} Question",
];

/// Kind of table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// `{KEY}` color token
    Color,
    /// `{+}`-style status glyph
    Glyph,
}

/// One row of the token listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenEntry {
    /// The literal text to embed, e.g. `{R}` or `{+}`
    pub token: String,
    /// Color token or glyph
    pub kind: TokenKind,
    /// What the token expands to, with ESC spelled out as `\033`
    pub expansion: String,
}

/// All color tokens followed by all glyphs, in table order
#[must_use]
pub fn token_entries() -> Vec<TokenEntry> {
    let colors = COLORS.iter().map(|(key, code)| TokenEntry {
        token: format!("{{{key}}}"),
        kind: TokenKind::Color,
        expansion: spell_escape(code),
    });
    let glyphs = GLYPHS.iter().map(|(key, expansion)| TokenEntry {
        token: (*key).to_string(),
        kind: TokenKind::Glyph,
        expansion: (*expansion).to_string(),
    });
    colors.chain(glyphs).collect()
}

/// Render entries as an aligned table with a live sample column
#[must_use]
pub fn render_token_table(entries: &[TokenEntry]) -> String {
    let width = entries
        .iter()
        .map(|e| e.expansion.chars().count())
        .max()
        .unwrap_or(0)
        .max("Expansion".len());

    let mut lines = vec![format!(
        "{:<6} {:<width$} {}",
        "Token".bold(),
        "Expansion".bold(),
        "Sample".bold()
    )];
    lines.push("─".repeat(width + 20).dimmed().to_string());

    for entry in entries {
        let sample = match entry.kind {
            TokenKind::Color => substitute(&format!("{}sample{{W}}", entry.token)),
            TokenKind::Glyph => substitute(&format!("{} sample", entry.token)),
        };
        lines.push(format!(
            "{:<6} {:<width$} {sample}",
            entry.token, entry.expansion
        ));
    }
    lines.join("\n")
}

/// Render entries as pretty JSON
pub fn render_token_json(entries: &[TokenEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries).context("Failed to serialize token table")
}

fn spell_escape(code: &str) -> String {
    code.replace('\x1b', "\\033")
}
