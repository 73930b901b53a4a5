// libdesfire/src/tag/operations/application.rs

use crate::device::{Device, Initialized};
use crate::protocol::{Command, Response};
use crate::tag::Tag;
use crate::types::Aid;
use crate::{Error, Result};

/// Select `aid` (or the PICC level with [`Aid::MASTER`]). The session's
/// selection only changes if the card accepted it.
pub fn select_application(
    tag: &mut Tag,
    device: &mut Device<Initialized>,
    aid: Aid,
) -> Result<()> {
    let cmd = Command::SelectApplication { aid };
    match device.execute(tag, &cmd)? {
        Response::Ack => Ok(()),
        _ => Err(Error::UnexpectedResponse(cmd.command_code())),
    }
}

/// List the applications on the card. Must be issued on the PICC level.
pub fn get_application_ids(tag: &mut Tag, device: &mut Device<Initialized>) -> Result<Vec<Aid>> {
    let cmd = Command::GetApplicationIds;
    match device.execute(tag, &cmd)? {
        Response::ApplicationIds(ids) => Ok(ids),
        _ => Err(Error::UnexpectedResponse(cmd.command_code())),
    }
}
