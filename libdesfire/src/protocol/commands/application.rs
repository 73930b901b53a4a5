// libdesfire/src/protocol/commands/application.rs

use crate::constants::{CMD_GET_APPLICATION_IDS, CMD_SELECT_APPLICATION};
use crate::types::Aid;

/// Encode SelectApplication (0x5A) followed by the 3-byte AID
pub fn encode_select_application(aid: Aid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4);
    buf.push(CMD_SELECT_APPLICATION);
    buf.extend_from_slice(aid.as_bytes());
    buf
}

/// Encode GetApplicationIDs (0x6A), no parameters
pub fn encode_get_application_ids() -> Vec<u8> {
    vec![CMD_GET_APPLICATION_IDS]
}
