//! Family-tagged addresses.

use super::octets::{Octets, V4_WIDTH, V6_WIDTH};
use super::CidrError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Address family, fixed by the endpoint a request arrives on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Width of an address of this family in bytes.
    pub const fn width(self) -> usize {
        match self {
            Family::V4 => V4_WIDTH,
            Family::V6 => V6_WIDTH,
        }
    }

    /// Longest valid prefix length.
    pub const fn bits(self) -> u8 {
        (self.width() * 8) as u8
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// An IPv4 or IPv6 address as raw octets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Address {
    V4(Octets<V4_WIDTH>),
    V6(Octets<V6_WIDTH>),
}

impl Address {
    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Address::V4(octets) => octets.as_bytes(),
            Address::V6(octets) => octets.as_bytes(),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => Address::V4(v4.into()),
            IpAddr::V6(v6) => Address::V6(v6.into()),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr {
            Address::V4(octets) => IpAddr::V4(octets.into()),
            Address::V6(octets) => IpAddr::V6(octets.into()),
        }
    }
}

/// Picks the family from the slice length. Anything other than 4 or 16 bytes
/// is a [`CidrError::LengthMismatch`] against the IPv6 width.
impl TryFrom<&[u8]> for Address {
    type Error = CidrError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.len() {
            V4_WIDTH => Ok(Address::V4(Octets::try_from(bytes)?)),
            _ => Ok(Address::V6(Octets::try_from(bytes)?)),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Address::V4(octets) => write!(f, "{}", Ipv4Addr::from(octets)),
            Address::V6(octets) => write!(f, "{}", Ipv6Addr::from(octets)),
        }
    }
}
