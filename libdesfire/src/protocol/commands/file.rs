// libdesfire/src/protocol/commands/file.rs

use crate::constants::{CMD_GET_FILE_IDS, CMD_GET_FILE_SETTINGS};
use crate::types::FileId;

/// Encode GetFileIDs (0x6F) for the selected application
pub fn encode_get_file_ids() -> Vec<u8> {
    vec![CMD_GET_FILE_IDS]
}

/// Encode GetFileSettings (0xF5) + file number
pub fn encode_get_file_settings(file: FileId) -> Vec<u8> {
    vec![CMD_GET_FILE_SETTINGS, file.as_u8()]
}
