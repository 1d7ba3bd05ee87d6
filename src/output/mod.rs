//! Output formatting for network summaries.
//!
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::to_json;
pub use terminal::{format_label, format_summary, print_summary};
