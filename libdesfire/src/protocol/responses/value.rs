// libdesfire/src/protocol/responses/value.rs

use crate::protocol::parser::le_i32_at;
use crate::Result;

/// Decode the signed 32-bit value (LSB first) returned by GetValue.
pub fn decode_value(data: &[u8]) -> Result<i32> {
    le_i32_at(data, 0)
}
