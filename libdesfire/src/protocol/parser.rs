// libdesfire/src/protocol/parser.rs

use crate::types::Aid;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read a little-endian u16 at given index, with bounds checking.
pub fn le_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    let s = slice_at(data, idx, 2)?;
    Ok(u16::from_le_bytes([s[0], s[1]]))
}

/// Read a little-endian 3-byte unsigned quantity (sizes, record counts).
pub fn le_u24_at(data: &[u8], idx: usize) -> Result<u32> {
    let s = slice_at(data, idx, 3)?;
    Ok(u32::from_le_bytes([s[0], s[1], s[2], 0]))
}

/// Read a little-endian i32 (value file limits and values).
pub fn le_i32_at(data: &[u8], idx: usize) -> Result<i32> {
    let s = slice_at(data, idx, 4)?;
    Ok(i32::from_le_bytes([s[0], s[1], s[2], s[3]]))
}

/// Fixed-size copy of `N` bytes at `idx`.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let s = slice_at(data, idx, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(s);
    Ok(out)
}

/// Parse an Aid (3 bytes) at `start` index with bounds checking.
pub fn aid_at(data: &[u8], start: usize) -> Result<Aid> {
    Ok(Aid::from_bytes(array_at(data, start)?))
}

/// Encode a 24-bit quantity LSB first. Values above 0xFFFFFF are rejected.
pub fn le_u24_bytes(name: &'static str, value: u32) -> Result<[u8; 3]> {
    if value > crate::constants::MAX_DATA_LEN {
        return Err(Error::ValueOutOfRange {
            name,
            value,
            max: crate::constants::MAX_DATA_LEN,
        });
    }
    let b = value.to_le_bytes();
    Ok([b[0], b[1], b[2]])
}
