//! IPv4 CIDR text parser (`a.b.c.d/n`).

use super::family::Family;
use super::network::NetworkSpecification;
use crate::error::NetSpecError;
use lazy_static::lazy_static;
use regex::Regex;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_LENGTH: u32 = 32;

lazy_static! {
    // ASCII digits only, `\d` would also accept other Unicode digits.
    static ref IPV4_CIDR: Regex = Regex::new(
        r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})/([0-9]{1,2})$"
    )
    .expect("Invalid Regex?");
}

/// Convert a prefix length to an IPv4 mask, top `len` bits set.
///
/// # Examples
/// ```
/// use netspec::models::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(len: u32) -> Result<u32, NetSpecError> {
    if len > MAX_LENGTH {
        Err(NetSpecError::range("prefix length", len, Family::Ipv4))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Parse IPv4 CIDR text into a network specification.
///
/// The whole input must match; surrounding whitespace is rejected. Octets above
/// 255 and prefix lengths above 32 are range errors.
pub fn parse_cidr(text: &str) -> Result<NetworkSpecification, NetSpecError> {
    let caps = IPV4_CIDR
        .captures(text)
        .ok_or_else(|| NetSpecError::Parse(text.to_string()))?;

    let field = |i: usize| -> Result<u32, NetSpecError> {
        caps[i]
            .parse::<u32>()
            .map_err(|_| NetSpecError::Parse(text.to_string()))
    };

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let value = field(i + 1)?;
        *octet = u8::try_from(value)
            .map_err(|_| NetSpecError::range("octet", value, Family::Ipv4))?;
    }
    let mask = prefix_mask(field(5)?)?;

    Ok(NetworkSpecification::v4(
        u32::from_be_bytes(octets),
        Some(mask),
    ))
}
