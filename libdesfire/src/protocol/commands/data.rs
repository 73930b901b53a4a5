// libdesfire/src/protocol/commands/data.rs

use crate::Result;
use crate::constants::{CMD_GET_VALUE, CMD_READ_DATA};
use crate::protocol::parser::le_u24_bytes;
use crate::types::FileId;

/// Encode ReadData (0xBD)
/// Layout: command(1) + file(1) + offset(3, LSB first) + length(3, LSB first)
/// A length of 0 asks for the whole file from `offset`.
pub fn encode_read_data(file: FileId, offset: u32, length: u32) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(8);
    buf.push(CMD_READ_DATA);
    buf.push(file.as_u8());
    buf.extend_from_slice(&le_u24_bytes("offset", offset)?);
    buf.extend_from_slice(&le_u24_bytes("length", length)?);
    Ok(buf)
}

/// Encode GetValue (0x6C) + file number
pub fn encode_get_value(file: FileId) -> Vec<u8> {
    vec![CMD_GET_VALUE, file.as_u8()]
}
