//! Processing of parsed network specifications.
//!
//! - [`summary`] - first/last/offset address report for one network

mod summary;

// Re-export public functions
pub use summary::{summarize, NetworkSummary, OffsetAddress};
