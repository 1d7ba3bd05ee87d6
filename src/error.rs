//! Error type shared by the whole crate.

use crate::models::Family;
use thiserror::Error;

/// Errors produced while parsing or constructing a [`crate::NetworkSpecification`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetSpecError {
    /// Input text does not match the CIDR grammar. Carries the text verbatim.
    #[error("Cannot parse network specification: {0}")]
    Parse(String),

    /// A value does not fit in the bit width of its family.
    #[error("{what} {value} out of range for {family} ({bits} bits)", bits = .family.bits())]
    Range {
        what: &'static str,
        value: String,
        family: Family,
    },

    #[error("JSON output failed: {0}")]
    Json(String),
}

impl NetSpecError {
    pub(crate) fn range(what: &'static str, value: impl ToString, family: Family) -> Self {
        NetSpecError::Range {
            what,
            value: value.to_string(),
            family,
        }
    }

    /// True for the precondition-violation kind.
    pub fn is_range(&self) -> bool {
        matches!(self, NetSpecError::Range { .. })
    }
}

impl From<serde_json::Error> for NetSpecError {
    fn from(e: serde_json::Error) -> Self {
        NetSpecError::Json(e.to_string())
    }
}
