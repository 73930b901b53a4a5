// libdesfire/src/protocol/responses/mod.rs

pub mod application;
pub mod ats;
pub mod file;
pub mod key;
pub mod value;
pub mod version;

pub use application::decode_application_ids;
pub use ats::{Ats, decode_ats};
pub use file::{FileKind, FileSettings, RecordSettings, decode_file_ids, decode_file_settings};
pub use key::{KeySettings, decode_key_settings, decode_key_version};
pub use value::decode_value;
pub use version::{
    ProductionInfo, VersionBlock, VersionInfo, decode_production_info, decode_version,
    decode_version_block,
};

use crate::constants::{
    CMD_GET_APPLICATION_IDS, CMD_GET_FILE_IDS, CMD_GET_FILE_SETTINGS, CMD_GET_KEY_SETTINGS,
    CMD_GET_KEY_VERSION, CMD_GET_VALUE, CMD_GET_VERSION, CMD_READ_DATA, CMD_SELECT_APPLICATION,
};
use crate::types::{Aid, FileId};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Status-only answer (SelectApplication).
    Ack,
    Version(VersionInfo),
    ApplicationIds(Vec<Aid>),
    FileIds(Vec<FileId>),
    FileSettings(FileSettings),
    KeySettings(KeySettings),
    KeyVersion(u8),
    Data(Vec<u8>),
    Value(i32),
}

impl Response {
    /// Decode the data part of an OPERATION_OK answer (status byte and
    /// envelope already stripped, chained frames concatenated) for the
    /// given command code.
    pub fn decode(command: u8, data: &[u8]) -> crate::Result<Self> {
        match command {
            CMD_SELECT_APPLICATION => Ok(Self::Ack),
            CMD_GET_VERSION => decode_version(data).map(Self::Version),
            CMD_GET_APPLICATION_IDS => decode_application_ids(data).map(Self::ApplicationIds),
            CMD_GET_FILE_IDS => decode_file_ids(data).map(Self::FileIds),
            CMD_GET_FILE_SETTINGS => decode_file_settings(data).map(Self::FileSettings),
            CMD_GET_KEY_SETTINGS => decode_key_settings(data).map(Self::KeySettings),
            CMD_GET_KEY_VERSION => decode_key_version(data).map(Self::KeyVersion),
            CMD_READ_DATA => Ok(Self::Data(data.to_vec())),
            CMD_GET_VALUE => decode_value(data).map(Self::Value),
            other => Err(crate::Error::UnsupportedCommand(other)),
        }
    }
}
