//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures:
//! - [`Octets`] - Fixed-width address bytes and the bitwise operators
//! - [`Address`] and [`Family`] - Family-tagged addresses
//! - [`Cidr`] and [`Network`] - Parsed CIDR notation

mod address;
mod cidr;
mod octets;

// Re-export public types
pub use address::{Address, Family};
pub use cidr::{Cidr, CidrError, Network};
pub use octets::{Octets, V4_WIDTH, V6_WIDTH};
