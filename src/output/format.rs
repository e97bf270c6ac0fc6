//! Byte buffer formatting.
//!
//! Plain functions over `&[u8]` with no knowledge of address families, so any
//! byte-oriented value (addresses, masks, hardware addresses) can reuse them.

use itertools::Itertools;
use std::net::Ipv6Addr;

/// Each byte as 8 binary digits, separated by spaces.
///
/// # Examples
/// ```
/// use subnet_query::output::to_binary;
/// assert_eq!(to_binary(&[192, 5]), "11000000 00000101");
/// ```
pub fn to_binary(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:08b}")).join(" ")
}

/// Each byte in decimal, joined with dots.
pub fn to_dotted_decimal_u8(bytes: &[u8]) -> String {
    bytes.iter().join(".")
}

/// Byte pairs read big-endian as `u16`, in decimal, joined with dots.
///
/// A trailing odd byte is rendered on its own.
pub fn to_dotted_decimal_u16(bytes: &[u8]) -> String {
    bytes
        .chunks(2)
        .map(|pair| match *pair {
            [hi, lo] => u16::from_be_bytes([hi, lo]),
            [single] => u16::from(single),
            _ => unreachable!("chunks(2) yields one or two bytes"),
        })
        .join(".")
}

/// Fully expanded IPv6 notation: eight groups of four lowercase hex digits.
///
/// Returns an empty string unless `bytes` is exactly 16 bytes long.
pub fn to_coloned_hex(bytes: &[u8]) -> String {
    if bytes.len() != 16 {
        return String::new();
    }
    bytes
        .chunks(2)
        .map(|pair| format!("{:02x}{:02x}", pair[0], pair[1]))
        .join(":")
}

/// Standard IPv6 text, with the longest run of zero groups collapsed.
///
/// Returns an empty string unless `bytes` is exactly 16 bytes long.
pub fn to_shortened_hex(bytes: &[u8]) -> String {
    match <[u8; 16]>::try_from(bytes) {
        Ok(octets) => Ipv6Addr::from(octets).to_string(),
        Err(_) => String::new(),
    }
}
