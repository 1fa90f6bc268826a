//! Text parsing for the diagnostic attribute surface.
//!
//! Attribute payloads arrive as raw text. The trigger value follows C
//! `strtoul(s, NULL, 0)` rules (auto radix, longest numeric prefix, never
//! fails); address octets follow strict base-16 rules (whole segment must be
//! consumed, one trailing newline allowed).

/// Split an optional `0x`/`0X` prefix, returning the remainder if present.
fn strip_hex_prefix(s: &[u8]) -> Option<&[u8]> {
    match s {
        [b'0', b'x' | b'X', rest @ ..] => Some(rest),
        _ => None,
    }
}

/// Accumulate the longest run of digits valid in `radix`.
///
/// Returns the value (wrapping on overflow), the number of digits consumed,
/// and whether the value overflowed `u64`.
fn accumulate(s: &[u8], radix: u32) -> (u64, usize, bool) {
    let mut value: u64 = 0;
    let mut overflow = false;
    let mut consumed = 0;

    for &byte in s {
        let Some(digit) = (byte as char).to_digit(radix) else {
            break;
        };
        let next = value
            .checked_mul(radix as u64)
            .and_then(|v| v.checked_add(digit as u64));
        match next {
            Some(v) => value = v,
            None => {
                overflow = true;
                value = value.wrapping_mul(radix as u64).wrapping_add(digit as u64);
            }
        }
        consumed += 1;
    }

    (value, consumed, overflow)
}

/// Parse an unsigned integer with auto-detected radix.
///
/// `0x` selects hex (only when a hex digit follows), a leading `0` selects
/// octal, anything else decimal. Parsing stops at the first invalid digit;
/// text without a numeric prefix yields 0.
pub(crate) fn parse_ulong_auto(text: &str) -> u64 {
    let bytes = text.as_bytes();

    let (digits, radix) = match bytes {
        [b'0', b'x' | b'X', next, ..] if next.is_ascii_hexdigit() => (&bytes[2..], 16),
        [b'0', ..] => (bytes, 8),
        _ => (bytes, 10),
    };

    accumulate(digits, radix).0
}

/// Parse one address octet in strict base 16.
///
/// Accepts an optional leading `+`, an optional `0x` prefix and a single
/// trailing newline. Returns `None` for empty, non-hex, overflowing or
/// out-of-range (> 0xff) input.
pub(crate) fn parse_hex_octet(segment: &str) -> Option<u8> {
    let mut bytes = segment.as_bytes();

    if let [b'+', rest @ ..] = bytes {
        bytes = rest;
    }
    if let Some(rest) = strip_hex_prefix(bytes) {
        bytes = rest;
    }

    let (value, consumed, overflow) = accumulate(bytes, 16);
    if consumed == 0 || overflow {
        return None;
    }

    match &bytes[consumed..] {
        [] | [b'\n'] => u8::try_from(value).ok(),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
