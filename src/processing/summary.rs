//! Derived address report for a network specification.

use crate::error::NetSpecError;
use crate::models::{Family, NetworkSpecification};
use serde::Serialize;

/// Host address at a given offset from the network address.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OffsetAddress {
    pub offset: i128,
    pub address: String,
}

/// Everything the CLI prints about one network.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    /// Canonical text form (`address` or `address/mask`).
    pub network: String,
    pub family: Family,
    pub address: String,
    pub mask: String,
    /// None when the mask is not a contiguous prefix mask.
    pub prefix_len: Option<u32>,
    pub single_host: bool,
    pub first: String,
    pub last: String,
    pub offsets: Vec<OffsetAddress>,
}

/// Build a [`NetworkSummary`], resolving every requested offset.
///
/// # Returns
/// * `Ok(NetworkSummary)` - all offsets resolved
/// * `Err` - the first offset that leaves the family's address range
pub fn summarize(
    spec: &NetworkSpecification,
    offsets: &[i128],
) -> Result<NetworkSummary, NetSpecError> {
    log::debug!("summarize({spec}) offsets={offsets:?}");

    if !spec.is_prefix_mask() {
        log::warn!("{spec} has a non-prefix mask, last address is not a subnet boundary");
    }

    let offsets = offsets
        .iter()
        .map(|&offset| -> Result<OffsetAddress, NetSpecError> {
            let host = spec.address_at_offset(offset)?;
            Ok(OffsetAddress {
                offset,
                address: host.address_text(),
            })
        })
        .collect::<Result<Vec<_>, NetSpecError>>()?;

    Ok(NetworkSummary {
        network: spec.to_string(),
        family: spec.family(),
        address: spec.address_text(),
        mask: spec.mask_text(),
        prefix_len: spec.prefix_len(),
        single_host: spec.is_single_host(),
        first: spec.first_address().address_text(),
        last: spec.last_address().address_text(),
        offsets,
    })
}
