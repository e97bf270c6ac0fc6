//! Subnet calculator served over HTTP.
//!
//! Given CIDR notation, derives the first and last address of the network and
//! how many addresses it spans, for IPv4 and IPv6, and renders the result in
//! binary, decimal and hexadecimal.
//!
//! - [`models`] - Addresses, masks and CIDR parsing
//! - [`processing`] - Range and address count arithmetic
//! - [`output`] - Formatting and the text report
//! - [`server`] - HTTP endpoints and the error channel
//! - [`config`] - Command line flags and logging setup

pub mod config;
pub mod models;
pub mod output;
pub mod processing;
pub mod server;

pub use config::{init_logging, Config};
pub use models::{Address, Cidr, CidrError, Family};
pub use output::calculate;
pub use server::{run, ServerHandle};
