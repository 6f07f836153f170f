//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::color::Printer;

/// Printer writing into in-memory buffers.
#[must_use]
pub const fn buffer_printer() -> Printer<Vec<u8>, Vec<u8>> {
    Printer::new(Vec::new(), Vec::new())
}

/// Everything written to the printer's output buffer so far.
#[must_use]
pub fn stdout_text(printer: &Printer<Vec<u8>, Vec<u8>>) -> String {
    String::from_utf8_lossy(printer.stdout()).into_owned()
}

/// Everything written to the printer's error buffer so far.
#[must_use]
pub fn stderr_text(printer: &Printer<Vec<u8>, Vec<u8>>) -> String {
    String::from_utf8_lossy(printer.stderr()).into_owned()
}
