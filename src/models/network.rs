//! Network specification: an address plus a subnet mask for one address family.
//!
//! [`NetworkSpecification`] is a tagged value over [`Network<u32>`] (IPv4) and
//! [`Network<u128>`] (IPv6). The address is always stored masked, so host bits
//! below the mask are zero.
//!
//! The general constructors accept any mask that fits the family width, not only
//! contiguous prefix masks. [`NetworkSpecification::last_address`] and the `/mask`
//! part of the text form only describe a real subnet when the mask is a prefix mask
//! (see [`NetworkSpecification::is_prefix_mask`]).

use super::cidr::parse_cidr;
use super::family::{AddressBits, Family};
use crate::error::NetSpecError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address and mask of a single width.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network<A> {
    address: A,
    mask: A,
}

impl<A: AddressBits> Network<A> {
    /// Build a network, masking the address. A missing mask means a single host.
    pub fn new(address: A, mask: Option<A>) -> Network<A> {
        let mask = mask.unwrap_or(A::ALL_ONES);
        Network {
            address: address & mask,
            mask,
        }
    }

    /// Single host network for `address`.
    pub fn host(address: A) -> Network<A> {
        Network::new(address, None)
    }

    pub fn address(&self) -> A {
        self.address
    }

    pub fn mask(&self) -> A {
        self.mask
    }

    pub fn is_single_host(&self) -> bool {
        self.mask == A::ALL_ONES
    }

    /// True if the mask is a run of set high bits followed only by zero bits.
    pub fn is_prefix_mask(&self) -> bool {
        self.mask.leading_ones() + self.mask.trailing_zeros() == A::BITS
    }

    pub fn prefix_len(&self) -> Option<u32> {
        self.is_prefix_mask().then(|| self.mask.leading_ones())
    }

    /// Single host at `address + offset`. Fails instead of wrapping past the family width.
    pub fn address_at_offset(&self, offset: i128) -> Result<Network<A>, NetSpecError> {
        let address = self.address.checked_offset(offset).ok_or_else(|| {
            let target = i128::try_from(self.address.to_u128())
                .ok()
                .and_then(|a| a.checked_add(offset))
                .map(|t| t.to_string())
                .unwrap_or_else(|| format!("{} + {offset}", self.address.to_u128()));
            NetSpecError::range("address", target, A::FAMILY)
        })?;
        Ok(Network::host(address))
    }

    pub fn first_address(&self) -> Network<A> {
        Network::host(self.address)
    }

    /// `address | !mask` as a single host. Only the last address of a subnet for prefix masks.
    pub fn last_address(&self) -> Network<A> {
        Network::host(self.address | !self.mask)
    }
}

/// IPv4 or IPv6 network specification.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum NetworkSpecification {
    V4(Network<u32>),
    V6(Network<u128>),
}

/// Apply the same expression to whichever width is inside.
macro_rules! with_network {
    ($spec:expr, $net:ident => $body:expr) => {
        match $spec {
            NetworkSpecification::V4($net) => $body,
            NetworkSpecification::V6($net) => $body,
        }
    };
}

/// Same as `with_network!` but rewraps a `Network` result in the original family.
macro_rules! map_network {
    ($spec:expr, $net:ident => $body:expr) => {
        match $spec {
            NetworkSpecification::V4($net) => NetworkSpecification::V4($body),
            NetworkSpecification::V6($net) => NetworkSpecification::V6($body),
        }
    };
}

impl NetworkSpecification {
    /// General constructor over a width-erased integer.
    ///
    /// A missing `mask` means the all-ones mask of `family`. Both `address` and
    /// `mask` must fit the family width, otherwise a range error is returned.
    /// The mask does not have to be a prefix mask.
    pub fn new(
        address: u128,
        mask: Option<u128>,
        family: Family,
    ) -> Result<NetworkSpecification, NetSpecError> {
        let all_ones = family.all_ones();
        let mask = mask.unwrap_or(all_ones);
        if mask > all_ones {
            return Err(NetSpecError::range("mask", mask, family));
        }
        if address > all_ones {
            return Err(NetSpecError::range("address", address, family));
        }
        let spec = match family {
            Family::Ipv4 => NetworkSpecification::v4(address as u32, Some(mask as u32)),
            Family::Ipv6 => NetworkSpecification::v6(address, Some(mask)),
        };
        debug_assert_eq!(spec.address() & !spec.mask() & all_ones, 0);
        Ok(spec)
    }

    pub fn v4(address: u32, mask: Option<u32>) -> NetworkSpecification {
        NetworkSpecification::V4(Network::new(address, mask))
    }

    pub fn v6(address: u128, mask: Option<u128>) -> NetworkSpecification {
        NetworkSpecification::V6(Network::new(address, mask))
    }

    /// Parse IPv4 CIDR text such as `192.168.1.0/24`.
    pub fn parse(text: &str) -> Result<NetworkSpecification, NetSpecError> {
        parse_cidr(text)
    }

    pub fn family(&self) -> Family {
        match self {
            NetworkSpecification::V4(_) => Family::Ipv4,
            NetworkSpecification::V6(_) => Family::Ipv6,
        }
    }

    /// Masked address widened to `u128`.
    pub fn address(&self) -> u128 {
        with_network!(self, n => n.address().to_u128())
    }

    pub fn mask(&self) -> u128 {
        with_network!(self, n => n.mask().to_u128())
    }

    pub fn address_bytes(&self) -> Vec<u8> {
        with_network!(self, n => n.address().to_be_byte_vec())
    }

    pub fn mask_bytes(&self) -> Vec<u8> {
        with_network!(self, n => n.mask().to_be_byte_vec())
    }

    pub fn is_single_host(&self) -> bool {
        with_network!(self, n => n.is_single_host())
    }

    pub fn is_prefix_mask(&self) -> bool {
        with_network!(self, n => n.is_prefix_mask())
    }

    /// Prefix length, or `None` for a non-contiguous mask.
    pub fn prefix_len(&self) -> Option<u32> {
        with_network!(self, n => n.prefix_len())
    }

    pub fn address_text(&self) -> String {
        with_network!(self, n => n.address().render())
    }

    pub fn mask_text(&self) -> String {
        with_network!(self, n => n.mask().render())
    }

    pub fn to_ip_addr(&self) -> IpAddr {
        match self {
            NetworkSpecification::V4(n) => IpAddr::V4(Ipv4Addr::from(n.address())),
            NetworkSpecification::V6(n) => IpAddr::V6(Ipv6Addr::from(n.address())),
        }
    }

    /// Single host `offset` addresses away from the network address.
    ///
    /// Not bounded by the subnet, only by the family width.
    pub fn address_at_offset(&self, offset: i128) -> Result<NetworkSpecification, NetSpecError> {
        Ok(match self {
            NetworkSpecification::V4(n) => NetworkSpecification::V4(n.address_at_offset(offset)?),
            NetworkSpecification::V6(n) => NetworkSpecification::V6(n.address_at_offset(offset)?),
        })
    }

    /// Network address as a single host.
    pub fn first_address(&self) -> NetworkSpecification {
        map_network!(self, n => n.first_address())
    }

    /// Highest address covered by the mask, as a single host.
    pub fn last_address(&self) -> NetworkSpecification {
        map_network!(self, n => n.last_address())
    }
}

impl fmt::Display for NetworkSpecification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_single_host() {
            write!(f, "{}", self.address_text())
        } else {
            write!(f, "{}/{}", self.address_text(), self.mask_text())
        }
    }
}

impl FromStr for NetworkSpecification {
    type Err = NetSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cidr(s)
    }
}

impl From<Ipv4Addr> for NetworkSpecification {
    fn from(addr: Ipv4Addr) -> Self {
        NetworkSpecification::v4(u32::from(addr), None)
    }
}

impl From<Ipv6Addr> for NetworkSpecification {
    fn from(addr: Ipv6Addr) -> Self {
        NetworkSpecification::v6(u128::from(addr), None)
    }
}

impl From<IpAddr> for NetworkSpecification {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(a) => a.into(),
            IpAddr::V6(a) => a.into(),
        }
    }
}
