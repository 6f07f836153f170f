//! CLI output formatting
//!
//! Human-readable and JSON listings of the token tables, plus the
//! sample lines shown by `termtint demo`.

pub mod display;

pub use display::render_token_json;
pub use display::render_token_table;
pub use display::token_entries;
pub use display::TokenEntry;
pub use display::DEMO_LINES;
