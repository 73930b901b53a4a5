// libdesfire/src/protocol/commands/key.rs

use crate::constants::{CMD_GET_KEY_SETTINGS, CMD_GET_KEY_VERSION};

/// Encode GetKeySettings (0x45)
pub fn encode_get_key_settings() -> Vec<u8> {
    vec![CMD_GET_KEY_SETTINGS]
}

/// Encode GetKeyVersion (0x64) + key number
pub fn encode_get_key_version(key: u8) -> Vec<u8> {
    vec![CMD_GET_KEY_VERSION, key]
}
