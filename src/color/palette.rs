//! Color token and glyph tables
//!
//! Text handed to the printer may embed `{KEY}` color tokens (e.g. `{R}` for
//! bright red) and bracketed status glyphs (e.g. `{+}`). [`substitute`]
//! expands glyphs first and color tokens second, so the color tokens nested
//! inside a glyph expansion are resolved by the same call.
//!
//! Neither table may contain a value that embeds a glyph key's literal text,
//! otherwise the two passes could expand a glyph twice.

/// Color token keys mapped to their ANSI escape sequences.
///
/// Keys are case-sensitive and used as `{KEY}` inside formatted text.
pub const COLORS: &[(&str, &str)] = &[
    ("W", "\x1b[0m"),   // white (reset/normal)
    ("R", "\x1b[91m"),  // bright red
    ("G", "\x1b[92m"),  // bright green
    ("O", "\x1b[93m"),  // bright orange/yellow
    ("B", "\x1b[94m"),  // bright blue
    ("P", "\x1b[95m"),  // bright purple
    ("C", "\x1b[96m"),  // bright cyan
    ("GR", "\x1b[90m"), // bright gray
    ("D", "\x1b[2m"),   // dim
    ("Y", "\x1b[33m"),  // dark yellow
    ("M", "\x1b[35m"),  // magenta
];

/// Status glyph shorthands mapped to their (still tokenized) expansions.
pub const GLYPHS: &[(&str, &str)] = &[
    ("{+}", " {W}{D}[{W}{G}+{W}{D}]{W}"),
    ("{!}", " {O}[{R}!{O}]{W}"),
    ("{?}", " {W}[{C}?{W}]"),
    ("{*}", " {W}[{B}*{W}]"),
    ("{-}", " {W}[{M}-{W}]"),
];

/// Look up the escape sequence for a color token key (without braces).
#[must_use]
pub fn escape_code(key: &str) -> Option<&'static str> {
    COLORS.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Look up the tokenized expansion of a glyph shorthand such as `{+}`.
#[must_use]
pub fn glyph(key: &str) -> Option<&'static str> {
    GLYPHS.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Expand glyph shorthands, then color tokens.
///
/// Unknown `{X}` tokens are left untouched.
#[must_use]
pub fn substitute(text: &str) -> String {
    let mut output = text.to_string();
    for (key, value) in GLYPHS {
        if output.contains(key) {
            output = output.replace(key, value);
        }
    }
    for (key, value) in COLORS {
        let token = format!("{{{key}}}");
        if output.contains(&token) {
            output = output.replace(&token, value);
        }
    }
    output
}
