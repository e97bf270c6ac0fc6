//! Plain-text subnet reports.

use super::format::{
    to_binary, to_coloned_hex, to_dotted_decimal_u16, to_dotted_decimal_u8, to_shortened_hex,
};
use crate::models::{Cidr, CidrError, Family, Network, Octets, V4_WIDTH, V6_WIDTH};
use crate::processing::Range;

/// Parse `cidr` for `family` and render its report.
///
/// # Arguments
/// * `cidr` - CIDR notation as received from the client
/// * `family` - The family the endpoint serves
///
/// # Returns
/// * `Ok(String)` - The report
/// * `Err(CidrError)` - The input is invalid; its `Display` is the client message
pub fn calculate(cidr: &str, family: Family) -> Result<String, CidrError> {
    let cidr = Cidr::parse(cidr, family)?;
    log::debug!("calculate({cidr}) for {family}");
    Ok(render(&cidr))
}

/// Render the report for an already parsed CIDR.
pub fn render(cidr: &Cidr) -> String {
    match cidr {
        Cidr::V4(network) => render_v4(network),
        Cidr::V6(network) => render_v6(network),
    }
}

fn render_v4(network: &Network<V4_WIDTH>) -> String {
    let range = Range::of(network);
    let line = |octets: Octets<V4_WIDTH>| {
        let bytes = octets.as_bytes();
        format!("{} | {}", to_binary(bytes), to_dotted_decimal_u8(bytes))
    };
    compose(
        [network.address(), network.mask(), range.first, range.last].map(line),
        &range,
    )
}

fn render_v6(network: &Network<V6_WIDTH>) -> String {
    let range = Range::of(network);
    let line = |octets: Octets<V6_WIDTH>| {
        let bytes = octets.as_bytes();
        format!(
            "{} | {} | {} | {}",
            to_binary(bytes),
            to_coloned_hex(bytes),
            to_dotted_decimal_u16(bytes),
            to_shortened_hex(bytes)
        )
    };
    compose(
        [network.address(), network.mask(), range.first, range.last].map(line),
        &range,
    )
}

fn compose<const N: usize>(lines: [String; 4], range: &Range<N>) -> String {
    let [address, mask, first, last] = lines;
    format!(
        "Address: {address}\nMask:    {mask}\nFirst:   {first}\nLast:    {last}\nTotal:   {total}\n",
        total = range.total
    )
}
