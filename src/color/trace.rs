//! Stack trace text for error reports

use std::backtrace::BacktraceStatus;

/// Continuation marker placed at the start of every trace line after the first.
pub const CONTINUATION: &str = "\n{!} {C}   ";

/// Build the raw trace text for an error.
///
/// The error message comes first, then one `  Caused by:` line per source,
/// then the backtrace frames if a backtrace was captured.
#[must_use]
pub fn trace_text(err: &anyhow::Error) -> String {
    let mut text = err.to_string();
    for cause in err.chain().skip(1) {
        text.push_str(&format!("\n  Caused by: {cause}"));
    }

    let backtrace = err.backtrace();
    if backtrace.status() == BacktraceStatus::Captured {
        text.push_str(&format!("\n{backtrace}"));
    }
    text
}

/// Rewrite raw trace text into tokenized, aligned output.
#[must_use]
pub fn format_trace(trace: &str) -> String {
    trace
        .trim()
        .replace('\n', CONTINUATION)
        .replace("  at ", "{W}at ")
        .replace("  Caused by: ", "{R}Caused by: {O}")
}
