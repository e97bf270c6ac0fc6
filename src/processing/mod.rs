//! Subnet arithmetic.
//!
//! - [`range`] - Network/broadcast addresses and the address count

mod range;

// Re-export public types and functions
pub use range::{cardinality, Range};
