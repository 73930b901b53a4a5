// libdesfire/src/protocol/commands/version.rs

use crate::constants::{CMD_ADDITIONAL_FRAME, CMD_GET_VERSION};

/// Encode GetVersion (0x60)
pub fn encode_get_version() -> Vec<u8> {
    vec![CMD_GET_VERSION]
}

/// Encode the continuation request (0xAF) sent after an ADDITIONAL_FRAME
/// status. Shares its value with the status byte.
pub fn encode_additional_frame() -> Vec<u8> {
    vec![CMD_ADDITIONAL_FRAME]
}
