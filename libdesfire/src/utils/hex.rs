//! Hexadecimal helpers for frame tracing, AID parsing and the diagnostic
//! dumps.

use std::fmt::Write;

/// Lowercase hex without separators: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // writing to a String cannot fail
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Lowercase hex, one space between bytes: `&[0xde, 0xad]` -> `"de ad"`.
/// Used for `trace!` output of raw frames.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    join_hex(bytes, false)
}

/// Uppercase hex, one space between bytes, as printed by the dumps.
pub fn bytes_to_hex_upper_spaced(bytes: &[u8]) -> String {
    join_hex(bytes, true)
}

fn join_hex(bytes: &[u8], upper: bool) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = if upper {
            write!(&mut s, "{:02X}", b)
        } else {
            write!(&mut s, "{:02x}", b)
        };
    }
    s
}

/// Parse a hex string into bytes. ASCII whitespace and a leading `0x` are
/// ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let trimmed = s.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: Vec<u8> = trimmed
        .bytes()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}
