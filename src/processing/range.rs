//! Network range and address count.

use crate::models::{Network, Octets};
use num_bigint::BigUint;
use std::cmp::Ordering;

/// First and last address of a network, and how many addresses lie between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range<const N: usize> {
    /// Network address, all host bits cleared.
    pub first: Octets<N>,
    /// Broadcast address, all host bits set.
    pub last: Octets<N>,
    /// Inclusive count, at least 1.
    pub total: BigUint,
}

impl<const N: usize> Range<N> {
    pub fn of(network: &Network<N>) -> Self {
        let first = network.address() & network.mask();
        let last = network.address() | !network.mask();
        let total = cardinality(&first, &last);
        log::trace!("range /{}: total={total}", network.prefix());
        Range { first, last, total }
    }
}

/// Inclusive number of addresses between `a` and `b`, in either order.
///
/// # Examples
/// ```
/// use subnet_query::models::Octets;
/// use subnet_query::processing::cardinality;
/// let a = Octets::from([10, 0, 0, 0]);
/// let b = Octets::from([10, 0, 0, 255]);
/// assert_eq!(cardinality(&a, &b).to_string(), "256");
/// assert_eq!(cardinality(&b, &a).to_string(), "256");
/// ```
pub fn cardinality<const N: usize>(a: &Octets<N>, b: &Octets<N>) -> BigUint {
    let (a, b) = (a.to_biguint(), b.to_biguint());
    let diff = match a.cmp(&b) {
        Ordering::Less => b - a,
        Ordering::Equal => BigUint::default(),
        Ordering::Greater => a - b,
    };
    diff + 1u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cidr, Family};
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn v4(text: &str) -> Range<4> {
        match Cidr::parse(text, Family::V4).unwrap() {
            Cidr::V4(network) => Range::of(&network),
            Cidr::V6(_) => unreachable!(),
        }
    }

    fn v6(text: &str) -> Range<16> {
        match Cidr::parse(text, Family::V6).unwrap() {
            Cidr::V6(network) => Range::of(&network),
            Cidr::V4(_) => unreachable!(),
        }
    }

    #[test]
    fn test_range_v4() {
        let range = v4("192.168.0.1/24");
        assert_eq!(Ipv4Addr::from(range.first), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(Ipv4Addr::from(range.last), Ipv4Addr::new(192, 168, 0, 255));
        assert_eq!(range.total.to_string(), "256");

        let range = v4("10.10.100.0/22");
        assert_eq!(Ipv4Addr::from(range.first), Ipv4Addr::new(10, 10, 100, 0));
        assert_eq!(Ipv4Addr::from(range.last), Ipv4Addr::new(10, 10, 103, 255));
        assert_eq!(range.total.to_string(), "1024");

        assert_eq!(v4("0.0.0.0/0").total.to_string(), "4294967296");
    }

    #[test]
    fn test_range_v6() {
        let range = v6("fdd8:0c61:bf60:590f::/64");
        assert_eq!(Ipv6Addr::from(range.first).to_string(), "fdd8:c61:bf60:590f::");
        assert_eq!(
            Ipv6Addr::from(range.last).to_string(),
            "fdd8:c61:bf60:590f:ffff:ffff:ffff:ffff"
        );
        assert_eq!(range.total.to_string(), "18446744073709551616");

        assert_eq!(
            v6("2606:4700:a560::/48").total.to_string(),
            "1208925819614629174706176"
        );
    }

    #[test]
    fn test_wide_v6_prefixes_exceed_u128() {
        assert_eq!(
            v6("::/0").total.to_string(),
            "340282366920938463463374607431768211456"
        );
        assert_eq!(
            v6("2000::/3").total,
            BigUint::from(1u8) << 125usize
        );
        assert_eq!(v6("ff00::/8").total, BigUint::from(1u8) << 120usize);
    }

    #[test]
    fn test_single_host() {
        let range = v4("10.1.2.3/32");
        assert_eq!(range.first, range.last);
        assert_eq!(Ipv4Addr::from(range.first), Ipv4Addr::new(10, 1, 2, 3));
        assert_eq!(range.total, BigUint::from(1u8));

        let range = v6("2606:4700::1111/128");
        assert_eq!(range.first, range.last);
        assert_eq!(Ipv6Addr::from(range.first).to_string(), "2606:4700::1111");
        assert_eq!(range.total, BigUint::from(1u8));
    }

    #[test]
    fn test_range_invariants() {
        for text in ["192.168.7.77/0", "192.168.7.77/13", "172.16.5.4/30", "1.2.3.4/31"] {
            let Cidr::V4(network) = Cidr::parse(text, Family::V4).unwrap() else {
                unreachable!()
            };
            let range = Range::of(&network);
            assert!(range.first <= range.last, "{text}");
            assert_eq!(range.first | !network.mask(), range.last, "{text}");
            assert_eq!(range.first & network.mask(), range.first, "{text}");
        }

        for text in [
            "fdd8:0c61:bf60:590f::1/64",
            "2606:4700::1111/37",
            "::1/0",
            "ff02::1/127",
            "ff02::1/128",
        ] {
            let Cidr::V6(network) = Cidr::parse(text, Family::V6).unwrap() else {
                unreachable!()
            };
            let range = Range::of(&network);
            assert!(range.first <= range.last, "{text}");
            assert_eq!(range.first | !network.mask(), range.last, "{text}");
            assert_eq!(range.first & network.mask(), range.first, "{text}");
        }
    }

    #[test]
    fn test_cardinality_is_symmetric() {
        let a = Octets::from(Ipv4Addr::new(10, 10, 100, 0));
        let b = Octets::from(Ipv4Addr::new(10, 10, 103, 255));
        assert_eq!(cardinality(&a, &b), cardinality(&b, &a));
        assert_eq!(cardinality(&a, &a), BigUint::from(1u8));
    }
}
