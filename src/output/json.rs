//! JSON output of network summaries.

use crate::error::NetSpecError;
use crate::processing::NetworkSummary;

/// Serialize summaries as a JSON array.
pub fn to_json(summaries: &[NetworkSummary], pretty: bool) -> Result<String, NetSpecError> {
    let json = if pretty {
        serde_json::to_string_pretty(summaries)?
    } else {
        serde_json::to_string(summaries)?
    };
    Ok(json)
}
