// libdesfire/src/tag/operations/version.rs

use log::{debug, warn};

use crate::device::{Device, Exchange, Initialized};
use crate::protocol::Command;
use crate::protocol::responses::{VersionInfo, decode_production_info, decode_version_block};
use crate::status::StatusCode;
use crate::tag::Tag;
use crate::{Error, Result};

/// OPERATION_OK ends the answer, ADDITIONAL_FRAME announces another frame.
fn check(ex: &Exchange, command: u8) -> Result<bool> {
    match ex.status {
        StatusCode::OperationOk => Ok(false),
        StatusCode::AdditionalFrame => Ok(true),
        status => Err(Error::Application { command, status }),
    }
}

/// GetVersion, driven frame by frame.
///
/// Up to three frames are fetched: hardware block, software block, then
/// UID/batch/production date. When the card ends the answer early the
/// missing parts are `None` in the result.
pub fn get_version(tag: &mut Tag, device: &mut Device<Initialized>) -> Result<VersionInfo> {
    let ex = device.exchange(tag, &Command::GetVersion)?;
    let mut more = check(&ex, Command::GetVersion.command_code())?;
    let hardware = decode_version_block(&ex.data)?;

    let mut software = None;
    if more {
        let ex = device.exchange(tag, &Command::AdditionalFrame)?;
        more = check(&ex, Command::AdditionalFrame.command_code())?;
        software = Some(decode_version_block(&ex.data)?);
    }

    let mut production = None;
    if more {
        let ex = device.exchange(tag, &Command::AdditionalFrame)?;
        more = check(&ex, Command::AdditionalFrame.command_code())?;
        production = Some(decode_production_info(&ex.data)?);
    }

    if more {
        warn!("GetVersion: card announced more than three frames, ignoring the rest");
    }

    let info = VersionInfo {
        hardware,
        software,
        production,
    };
    debug!("GetVersion: complete={}", info.is_complete());
    Ok(info)
}
