// libdesfire/src/tag/operations/data.rs

use crate::device::{Device, Initialized};
use crate::protocol::{Command, Response};
use crate::tag::Tag;
use crate::types::FileId;
use crate::{Error, Result};

/// Read from a standard or backup data file.
pub fn read_data(
    tag: &mut Tag,
    device: &mut Device<Initialized>,
    file: FileId,
    offset: u32,
    length: u32,
) -> Result<Vec<u8>> {
    let cmd = Command::ReadData {
        file,
        offset,
        length,
    };
    match device.execute(tag, &cmd)? {
        Response::Data(data) => Ok(data),
        _ => Err(Error::UnexpectedResponse(cmd.command_code())),
    }
}

/// Read into a caller buffer. The requested length is `buf.len()` and the
/// card may not deliver more than that; an empty buffer reads nothing.
pub fn read_data_into(
    tag: &mut Tag,
    device: &mut Device<Initialized>,
    file: FileId,
    offset: u32,
    buf: &mut [u8],
) -> Result<usize> {
    if buf.is_empty() {
        return Ok(0);
    }
    let length = u32::try_from(buf.len()).unwrap_or(u32::MAX);
    let cmd = Command::ReadData {
        file,
        offset,
        length,
    };
    let data = device
        .exchange_chained(tag, &cmd, buf.len())?
        .require_ok(cmd.command_code())?;
    buf[..data.len()].copy_from_slice(&data);
    Ok(data.len())
}

/// Current value of a value file.
pub fn get_value(tag: &mut Tag, device: &mut Device<Initialized>, file: FileId) -> Result<i32> {
    let cmd = Command::GetValue { file };
    match device.execute(tag, &cmd)? {
        Response::Value(value) => Ok(value),
        _ => Err(Error::UnexpectedResponse(cmd.command_code())),
    }
}
