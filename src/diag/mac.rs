//! Station address diagnostic
//!
//! Reports the address held in the MAC hardware and lets a test operator
//! replace it with a colon-separated six-octet hex string.

use crate::internal::constants::{MAC_ADDR_LEN, MAC_ADDR_MULTICAST_BIT};
use crate::internal::parse::parse_hex_octet;

/// Access to the station address owned by the MAC core
pub trait StationAddress {
    /// Read the address currently programmed into the MAC hardware
    fn read_hw_address(&mut self) -> [u8; MAC_ADDR_LEN];

    /// Replace the address the network stack uses for this interface
    fn commit_address(&mut self, addr: &[u8; MAC_ADDR_LEN]);

    /// Program the MAC hardware address filter
    fn write_hw_address(&mut self, addr: &[u8; MAC_ADDR_LEN]);
}

impl<T: StationAddress + ?Sized> StationAddress for &mut T {
    fn read_hw_address(&mut self) -> [u8; MAC_ADDR_LEN] {
        T::read_hw_address(self)
    }

    fn commit_address(&mut self, addr: &[u8; MAC_ADDR_LEN]) {
        T::commit_address(self, addr);
    }

    fn write_hw_address(&mut self, addr: &[u8; MAC_ADDR_LEN]) {
        T::write_hw_address(self, addr);
    }
}

/// Parse a colon-separated address.
///
/// Empty segments are skipped and parsing stops once six octets are read.
/// The group bit of the first octet is cleared. Returns `None` unless exactly
/// six well-formed octets were found.
pub fn parse_address(text: &str) -> Option<[u8; MAC_ADDR_LEN]> {
    let mut addr = [0u8; MAC_ADDR_LEN];
    let mut count = 0;

    for segment in text.split(':') {
        if count == MAC_ADDR_LEN {
            break;
        }
        if segment.is_empty() {
            continue;
        }
        let octet = parse_hex_octet(segment)?;
        addr[count] = if count == 0 {
            octet & !MAC_ADDR_MULTICAST_BIT
        } else {
            octet
        };
        count += 1;
    }

    (count == MAC_ADDR_LEN).then_some(addr)
}

/// Apply a parsed address: network identity first, then hardware
pub(crate) fn commit<S: StationAddress>(station: &mut S, addr: &[u8; MAC_ADDR_LEN]) {
    station.commit_address(addr);
    station.write_hw_address(addr);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_address() {
        assert_eq!(
            parse_address("aa:bb:cc:dd:ee:ff"),
            Some([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff])
        );
    }

    #[test]
    fn parse_clears_multicast_bit_of_first_octet_only() {
        assert_eq!(
            parse_address("01:03:05:07:09:0b"),
            Some([0x00, 0x03, 0x05, 0x07, 0x09, 0x0b])
        );
        assert_eq!(parse_address("ff:ff:ff:ff:ff:ff"), Some([0xfe, 0xff, 0xff, 0xff, 0xff, 0xff]));
    }

    #[test]
    fn parse_accepts_trailing_newline() {
        assert_eq!(
            parse_address("02:00:00:12:34:56\n"),
            Some([0x02, 0x00, 0x00, 0x12, 0x34, 0x56])
        );
    }

    #[test]
    fn parse_accepts_short_and_prefixed_octets() {
        assert_eq!(
            parse_address("2:0:0x0:a:B:0xC"),
            Some([0x02, 0x00, 0x00, 0x0a, 0x0b, 0x0c])
        );
    }

    #[test]
    fn parse_skips_empty_segments() {
        assert_eq!(
            parse_address("::aa::bb:cc:dd:ee:ff:"),
            Some([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff])
        );
    }

    #[test]
    fn parse_ignores_text_after_sixth_octet() {
        assert_eq!(
            parse_address("aa:bb:cc:dd:ee:ff:zz"),
            Some([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff])
        );
    }

    #[test]
    fn parse_rejects_short_address() {
        assert_eq!(parse_address("aa:bb:cc:dd:ee"), None);
        assert_eq!(parse_address(""), None);
        assert_eq!(parse_address("\n"), None);
    }

    #[test]
    fn parse_rejects_bad_octets() {
        assert_eq!(parse_address("aa:bb:cc:dd:ee:100"), None);
        assert_eq!(parse_address("aa:bb:cc:dd:ee:gg"), None);
        assert_eq!(parse_address("aa:bb:cc:dd:ee: ff"), None);
        assert_eq!(parse_address("aa-bb-cc-dd-ee-ff"), None);
    }
}
