//! IPv4/IPv6 network specifications: CIDR parsing, text rendering and
//! masked-address arithmetic (first, last and offset addresses).
//!
//! ```
//! use netspec::NetworkSpecification;
//!
//! let net: NetworkSpecification = "192.168.0.10/30".parse().unwrap();
//! assert_eq!(net.to_string(), "192.168.0.8/255.255.255.252");
//! assert_eq!(net.last_address().to_string(), "192.168.0.11");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::NetSpecError;
pub use models::{Family, NetworkSpecification};

/// Parse each network and summarize it with the given offsets.
///
/// Stops at the first network that fails to parse or whose offsets leave the address range.
pub fn summarize_networks(
    networks: &[String],
    offsets: &[i128],
) -> Result<Vec<processing::NetworkSummary>, NetSpecError> {
    networks
        .iter()
        .map(|text| {
            let spec = NetworkSpecification::parse(text)?;
            processing::summarize(&spec, offsets)
        })
        .collect()
}
