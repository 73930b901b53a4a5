// libdesfire/src/tag/operations/file.rs

use crate::device::{Device, Initialized};
use crate::protocol::responses::FileSettings;
use crate::protocol::{Command, Response};
use crate::tag::Tag;
use crate::types::FileId;
use crate::{Error, Result};

pub fn get_file_ids(tag: &mut Tag, device: &mut Device<Initialized>) -> Result<Vec<FileId>> {
    let cmd = Command::GetFileIds;
    match device.execute(tag, &cmd)? {
        Response::FileIds(ids) => Ok(ids),
        _ => Err(Error::UnexpectedResponse(cmd.command_code())),
    }
}

pub fn get_file_settings(
    tag: &mut Tag,
    device: &mut Device<Initialized>,
    file: FileId,
) -> Result<FileSettings> {
    let cmd = Command::GetFileSettings { file };
    match device.execute(tag, &cmd)? {
        Response::FileSettings(settings) => Ok(settings),
        _ => Err(Error::UnexpectedResponse(cmd.command_code())),
    }
}
