//! Fixed-width address octets.
//!
//! [`Octets`] is the raw big-endian byte form of an address or mask. The width
//! is part of the type, so the bitwise operators (`&`, `|`, `!`) can only ever
//! combine two values of the same address family.

use super::CidrError;
use num_bigint::BigUint;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::ops::{BitAnd, BitOr, Not};

/// Width of an IPv4 address in bytes.
pub const V4_WIDTH: usize = 4;
/// Width of an IPv6 address in bytes.
pub const V6_WIDTH: usize = 16;

/// Big-endian address bytes of a fixed width.
///
/// Ordering is lexicographic over the bytes, which matches the ordering of the
/// addresses read as unsigned integers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Octets<const N: usize>([u8; N]);

impl<const N: usize> Octets<N> {
    /// Build a mask with the first `prefix` bits set.
    ///
    /// Returns `None` when `prefix` is longer than the address.
    ///
    /// # Examples
    /// ```
    /// use subnet_query::models::Octets;
    /// assert_eq!(Octets::<4>::mask(20).unwrap().as_bytes(), &[255, 255, 240, 0]);
    /// ```
    pub fn mask(prefix: u8) -> Option<Self> {
        let prefix = usize::from(prefix);
        if prefix > N * 8 {
            return None;
        }
        let mut bytes = [0u8; N];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let bits = prefix.saturating_sub(i * 8);
            *byte = if bits >= 8 { 0xFF } else { !(0xFFu8 >> bits) };
        }
        Some(Octets(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The address read as an unsigned big-endian integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }
}

impl<const N: usize> From<[u8; N]> for Octets<N> {
    fn from(bytes: [u8; N]) -> Self {
        Octets(bytes)
    }
}

impl<const N: usize> TryFrom<&[u8]> for Octets<N> {
    type Error = CidrError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; N] = bytes.try_into().map_err(|_| CidrError::LengthMismatch {
            expected: N,
            found: bytes.len(),
        })?;
        Ok(Octets(bytes))
    }
}

impl From<Ipv4Addr> for Octets<V4_WIDTH> {
    fn from(addr: Ipv4Addr) -> Self {
        Octets(addr.octets())
    }
}

impl From<Ipv6Addr> for Octets<V6_WIDTH> {
    fn from(addr: Ipv6Addr) -> Self {
        Octets(addr.octets())
    }
}

impl From<Octets<V4_WIDTH>> for Ipv4Addr {
    fn from(octets: Octets<V4_WIDTH>) -> Self {
        Ipv4Addr::from(octets.0)
    }
}

impl From<Octets<V6_WIDTH>> for Ipv6Addr {
    fn from(octets: Octets<V6_WIDTH>) -> Self {
        Ipv6Addr::from(octets.0)
    }
}

impl<const N: usize> BitAnd for Octets<N> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        let mut out = self.0;
        out.iter_mut().zip(rhs.0).for_each(|(a, b)| *a &= b);
        Octets(out)
    }
}

impl<const N: usize> BitOr for Octets<N> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        let mut out = self.0;
        out.iter_mut().zip(rhs.0).for_each(|(a, b)| *a |= b);
        Octets(out)
    }
}

/// One's complement, byte by byte.
impl<const N: usize> Not for Octets<N> {
    type Output = Self;

    fn not(self) -> Self {
        Octets(self.0.map(|b| b ^ 0xFF))
    }
}
