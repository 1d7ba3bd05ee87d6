//! Address families and the fixed-width integers backing them.

use serde::Serialize;
use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Not};

/// IP address family. Fixes the integer width and the text rendering rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Family {
    #[serde(rename = "ipv4")]
    Ipv4,
    #[serde(rename = "ipv6")]
    Ipv6,
}

impl Family {
    /// Address width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Family::Ipv4 => u32::BITS,
            Family::Ipv6 => u128::BITS,
        }
    }

    /// All-ones mask for this family, widened to `u128`.
    pub const fn all_ones(self) -> u128 {
        match self {
            Family::Ipv4 => u32::MAX as u128,
            Family::Ipv6 => u128::MAX,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::Ipv4 => write!(f, "IPv4"),
            Family::Ipv6 => write!(f, "IPv6"),
        }
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u128 {}
}

/// Unsigned integer holding one address of a given family.
///
/// Only implemented for `u32` (IPv4) and `u128` (IPv6).
pub trait AddressBits:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
{
    const BITS: u32;
    const ALL_ONES: Self;
    const FAMILY: Family;

    /// Big-endian byte sequence, most significant byte first.
    fn to_be_byte_vec(self) -> Vec<u8>;

    fn to_u128(self) -> u128;

    /// `None` if `value` does not fit in this width.
    fn try_from_u128(value: u128) -> Option<Self>;

    /// `self + offset`, or `None` if the result leaves `[0, 2^BITS)`.
    fn checked_offset(self, offset: i128) -> Option<Self>;

    fn leading_ones(self) -> u32;

    fn trailing_zeros(self) -> u32;

    /// Family-specific text form of the value.
    fn render(self) -> String;
}

macro_rules! impl_address_bits {
    ($repr:ty, $family:expr) => {
        impl AddressBits for $repr {
            const BITS: u32 = <$repr>::BITS;
            const ALL_ONES: Self = <$repr>::MAX;
            const FAMILY: Family = $family;

            fn to_be_byte_vec(self) -> Vec<u8> {
                self.to_be_bytes().to_vec()
            }

            fn to_u128(self) -> u128 {
                u128::from(self)
            }

            fn try_from_u128(value: u128) -> Option<Self> {
                <$repr>::try_from(value).ok()
            }

            fn checked_offset(self, offset: i128) -> Option<Self> {
                offset_u128(self.to_u128(), offset).and_then(Self::try_from_u128)
            }

            fn leading_ones(self) -> u32 {
                <$repr>::leading_ones(self)
            }

            fn trailing_zeros(self) -> u32 {
                <$repr>::trailing_zeros(self)
            }

            fn render(self) -> String {
                render_bytes(&self.to_be_byte_vec(), $family)
            }
        }
    };
}

impl_address_bits!(u32, Family::Ipv4);
impl_address_bits!(u128, Family::Ipv6);

fn offset_u128(value: u128, offset: i128) -> Option<u128> {
    value.checked_add_signed(offset)
}

/// Render big-endian bytes: dotted decimal for IPv4, colon separated hex byte pairs for IPv6.
///
/// The IPv6 form is fixed width: no `::` elision and no leading zero suppression.
pub fn render_bytes(bytes: &[u8], family: Family) -> String {
    match family {
        Family::Ipv4 => bytes
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join("."),
        Family::Ipv6 => bytes
            .chunks(2)
            .map(|pair| pair.iter().map(|b| format!("{b:02x}")).collect::<String>())
            .collect::<Vec<_>>()
            .join(":"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_widths() {
        assert_eq!(Family::Ipv4.bits(), 32);
        assert_eq!(Family::Ipv6.bits(), 128);
        assert_eq!(Family::Ipv4.all_ones(), 0xFFFF_FFFF);
        assert_eq!(Family::Ipv6.all_ones(), u128::MAX);
    }

    #[test]
    fn test_render_ipv4() {
        assert_eq!(0xC0A8_0001u32.render(), "192.168.0.1");
        assert_eq!(0u32.render(), "0.0.0.0");
        assert_eq!(u32::MAX.render(), "255.255.255.255");
    }

    #[test]
    fn test_render_ipv6() {
        let addr: u128 = 0xfe80_0000_0000_0000_0000_0000_0000_0001;
        assert_eq!(addr.render(), "fe80:0000:0000:0000:0000:0000:0000:0001");
        assert_eq!(
            u128::MAX.render(),
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"
        );
    }

    #[test]
    fn test_checked_offset() {
        assert_eq!(10u32.checked_offset(5), Some(15));
        assert_eq!(10u32.checked_offset(-10), Some(0));
        assert_eq!(10u32.checked_offset(-11), None);
        assert_eq!(u32::MAX.checked_offset(1), None);
        assert_eq!(u128::MAX.checked_offset(1), None);
        assert_eq!(u128::MAX.checked_offset(-1), Some(u128::MAX - 1));
    }

    #[test]
    fn test_leading_ones_trailing_zeros() {
        assert_eq!(AddressBits::leading_ones(0xFFFF_FF00u32), 24);
        assert_eq!(AddressBits::trailing_zeros(0xFFFF_FF00u32), 8);
    }
}
