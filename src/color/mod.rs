//! Token-based terminal coloring
//!
//! Formatted text embeds `{KEY}` color tokens and `{+}`-style status glyphs
//! which are expanded to ANSI escape sequences on output.

pub mod palette;
pub mod printer;
pub mod trace;

pub use palette::{escape_code, glyph, substitute, COLORS, GLYPHS};
pub use printer::{Printer, NO_TARGETS_FOUND};
