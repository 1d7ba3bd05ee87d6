//! Domain model for network specifications.
//!
//! - [`Family`] - IPv4 / IPv6 discriminator and the [`AddressBits`] width trait
//! - [`NetworkSpecification`] - address + mask value type with address arithmetic
//! - [`parse_cidr`] - IPv4 CIDR text parser

mod cidr;
mod family;
mod network;

// Re-export public types
pub use cidr::{parse_cidr, prefix_mask, MAX_LENGTH};
pub use family::{render_bytes, AddressBits, Family};
pub use network::{Network, NetworkSpecification};
