//! CIDR notation parsing.
//!
//! Provides [`Network`] for an address plus its prefix mask, and [`Cidr`] which
//! tags a network with its address family.

use super::address::{Address, Family};
use super::octets::{Octets, V4_WIDTH, V6_WIDTH};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing or combining addresses.
///
/// The `Display` text of the input errors is the message shown to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    /// Text is not "address/prefix-length".
    #[error("Not valid CIDR notation.")]
    InvalidCidr,
    /// Address parsed, but not for the family the endpoint expects.
    #[error("Not a valid {0} address.")]
    FamilyMismatch(Family),
    /// A byte buffer of the wrong width reached a fixed-width type.
    #[error("length {found} does not equal length {expected}")]
    LengthMismatch { expected: usize, found: usize },
}

/// An address together with the mask of its prefix length.
///
/// The address keeps its host bits; see [`crate::processing::Range`] for the
/// network and broadcast addresses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Network<const N: usize> {
    address: Octets<N>,
    mask: Octets<N>,
    prefix: u8,
}

impl<const N: usize> Network<N> {
    pub fn new(address: Octets<N>, prefix: u8) -> Result<Self, CidrError> {
        let mask = Octets::mask(prefix).ok_or(CidrError::InvalidCidr)?;
        Ok(Network {
            address,
            mask,
            prefix,
        })
    }

    pub fn address(&self) -> Octets<N> {
        self.address
    }

    pub fn mask(&self) -> Octets<N> {
        self.mask
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }
}

impl fmt::Display for Network<V4_WIDTH> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", Ipv4Addr::from(self.address), self.prefix)
    }
}

impl fmt::Display for Network<V6_WIDTH> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", Ipv6Addr::from(self.address), self.prefix)
    }
}

/// A parsed CIDR of either family.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cidr {
    V4(Network<V4_WIDTH>),
    V6(Network<V6_WIDTH>),
}

impl Cidr {
    /// Parse `text` and require it to be of `family`.
    ///
    /// # Arguments
    /// * `text` - CIDR notation, e.g. "192.168.0.1/24"
    /// * `family` - The family the caller can handle
    ///
    /// # Returns
    /// * `Err(CidrError::InvalidCidr)` - The text is not CIDR notation
    /// * `Err(CidrError::FamilyMismatch)` - Valid CIDR of the other family
    pub fn parse(text: &str, family: Family) -> Result<Cidr, CidrError> {
        let cidr = Cidr::from_str(text)?;
        match cidr {
            Cidr::V6(network) if Ipv6Addr::from(network.address).to_ipv4_mapped().is_some() => {
                log::debug!("IPv4-mapped address {network} is not accepted as either family");
                Err(CidrError::FamilyMismatch(family))
            }
            _ if cidr.family() != family => Err(CidrError::FamilyMismatch(family)),
            _ => Ok(cidr),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Cidr::V4(_) => Family::V4,
            Cidr::V6(_) => Family::V6,
        }
    }

    pub fn address(&self) -> Address {
        match self {
            Cidr::V4(network) => Address::V4(network.address()),
            Cidr::V6(network) => Address::V6(network.address()),
        }
    }

    pub fn prefix(&self) -> u8 {
        match self {
            Cidr::V4(network) => network.prefix(),
            Cidr::V6(network) => network.prefix(),
        }
    }
}

/// Parses either family; the family follows from the address text.
impl FromStr for Cidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = s.split_once('/').ok_or(CidrError::InvalidCidr)?;
        let prefix = parse_prefix(prefix).ok_or(CidrError::InvalidCidr)?;
        let addr = Address::from(IpAddr::from_str(addr).map_err(|_| CidrError::InvalidCidr)?);
        if prefix > addr.family().bits() {
            return Err(CidrError::InvalidCidr);
        }

        match addr {
            Address::V4(octets) => Ok(Cidr::V4(Network::new(octets, prefix)?)),
            Address::V6(octets) => Ok(Cidr::V6(Network::new(octets, prefix)?)),
        }
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cidr::V4(network) => fmt::Display::fmt(network, f),
            Cidr::V6(network) => fmt::Display::fmt(network, f),
        }
    }
}

/// Decimal digits only, no sign, no leading zero.
fn parse_prefix(text: &str) -> Option<u8> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    text.parse().ok()
}
