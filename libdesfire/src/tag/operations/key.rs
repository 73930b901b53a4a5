// libdesfire/src/tag/operations/key.rs

use crate::device::{Device, Initialized};
use crate::protocol::responses::KeySettings;
use crate::protocol::{Command, Response};
use crate::tag::Tag;
use crate::{Error, Result};

/// Key settings of the selected application (or of the PICC master key).
pub fn get_key_settings(tag: &mut Tag, device: &mut Device<Initialized>) -> Result<KeySettings> {
    let cmd = Command::GetKeySettings;
    match device.execute(tag, &cmd)? {
        Response::KeySettings(settings) => Ok(settings),
        _ => Err(Error::UnexpectedResponse(cmd.command_code())),
    }
}

pub fn get_key_version(tag: &mut Tag, device: &mut Device<Initialized>, key: u8) -> Result<u8> {
    let cmd = Command::GetKeyVersion { key };
    match device.execute(tag, &cmd)? {
        Response::KeyVersion(version) => Ok(version),
        _ => Err(Error::UnexpectedResponse(cmd.command_code())),
    }
}
