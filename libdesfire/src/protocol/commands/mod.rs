// libdesfire/src/protocol/commands/mod.rs

pub mod application;
pub mod data;
pub mod file;
pub mod key;
pub mod version;

pub use application::{encode_get_application_ids, encode_select_application};
pub use data::{encode_get_value, encode_read_data};
pub use file::{encode_get_file_ids, encode_get_file_settings};
pub use key::{encode_get_key_settings, encode_get_key_version};
pub use version::{encode_additional_frame, encode_get_version};

use crate::constants::{
    CMD_ADDITIONAL_FRAME, CMD_GET_APPLICATION_IDS, CMD_GET_FILE_IDS, CMD_GET_FILE_SETTINGS,
    CMD_GET_KEY_SETTINGS, CMD_GET_KEY_VERSION, CMD_GET_VALUE, CMD_GET_VERSION, CMD_READ_DATA,
    CMD_SELECT_APPLICATION, MAX_APPLICATION_IDS_LEN, MAX_DATA_LEN, MAX_FILE_COUNT,
    VERSION_BLOCK_LEN, VERSION_PRODUCTION_LEN,
};
use crate::types::{Aid, FileId};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GetVersion,
    /// Continuation request after an ADDITIONAL_FRAME status.
    AdditionalFrame,
    SelectApplication {
        aid: Aid,
    },
    GetApplicationIds,
    GetFileIds,
    GetFileSettings {
        file: FileId,
    },
    GetKeySettings,
    GetKeyVersion {
        key: u8,
    },
    ReadData {
        file: FileId,
        offset: u32,
        length: u32,
    },
    GetValue {
        file: FileId,
    },
}

impl Command {
    /// Return the DESFire native command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetVersion => CMD_GET_VERSION,
            Self::AdditionalFrame => CMD_ADDITIONAL_FRAME,
            Self::SelectApplication { .. } => CMD_SELECT_APPLICATION,
            Self::GetApplicationIds => CMD_GET_APPLICATION_IDS,
            Self::GetFileIds => CMD_GET_FILE_IDS,
            Self::GetFileSettings { .. } => CMD_GET_FILE_SETTINGS,
            Self::GetKeySettings => CMD_GET_KEY_SETTINGS,
            Self::GetKeyVersion { .. } => CMD_GET_KEY_VERSION,
            Self::ReadData { .. } => CMD_READ_DATA,
            Self::GetValue { .. } => CMD_GET_VALUE,
        }
    }

    /// Encode the command into the raw body (command code + params).
    pub fn encode(&self) -> crate::Result<Vec<u8>> {
        Ok(match self {
            Self::GetVersion => encode_get_version(),
            Self::AdditionalFrame => encode_additional_frame(),
            Self::SelectApplication { aid } => encode_select_application(*aid),
            Self::GetApplicationIds => encode_get_application_ids(),
            Self::GetFileIds => encode_get_file_ids(),
            Self::GetFileSettings { file } => encode_get_file_settings(*file),
            Self::GetKeySettings => encode_get_key_settings(),
            Self::GetKeyVersion { key } => encode_get_key_version(*key),
            Self::ReadData {
                file,
                offset,
                length,
            } => encode_read_data(*file, *offset, *length)?,
            Self::GetValue { file } => encode_get_value(*file),
        })
    }

    /// Whether an ADDITIONAL_FRAME answer is a continuation rather than an
    /// error for this command.
    pub fn supports_chaining(&self) -> bool {
        matches!(
            self,
            Self::GetVersion
                | Self::AdditionalFrame
                | Self::GetApplicationIds
                | Self::GetFileIds
                | Self::ReadData { .. }
        )
    }

    /// Upper bound on the accumulated answer of a chained command.
    pub fn response_capacity(&self) -> usize {
        match self {
            Self::GetVersion => 2 * VERSION_BLOCK_LEN + VERSION_PRODUCTION_LEN,
            Self::GetApplicationIds => MAX_APPLICATION_IDS_LEN,
            Self::GetFileIds => MAX_FILE_COUNT,
            // length 0 reads the whole file
            Self::ReadData { length: 0, .. } => MAX_DATA_LEN as usize,
            Self::ReadData { length, .. } => *length as usize,
            Self::GetValue { .. } => 4,
            Self::GetKeySettings => 2,
            Self::GetKeyVersion { .. } => 1,
            Self::GetFileSettings { .. } => 17,
            Self::SelectApplication { .. } => 0,
            Self::AdditionalFrame => MAX_DATA_LEN as usize,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::GetVersion => "GetVersion",
            Self::AdditionalFrame => "AdditionalFrame",
            Self::SelectApplication { .. } => "SelectApplication",
            Self::GetApplicationIds => "GetApplicationIds",
            Self::GetFileIds => "GetFileIDs",
            Self::GetFileSettings { .. } => "GetFileSettings",
            Self::GetKeySettings => "GetKeySettings",
            Self::GetKeyVersion { .. } => "GetKeyVersion",
            Self::ReadData { .. } => "ReadData",
            Self::GetValue { .. } => "GetValue",
        }
    }
}
