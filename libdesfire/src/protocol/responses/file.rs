// libdesfire/src/protocol/responses/file.rs

use crate::constants::MAX_FILE_COUNT;
use crate::protocol::parser::{array_at, byte_at, ensure_len, le_i32_at, le_u24_at};
use crate::types::{AccessRights, CommunicationMode, FileId, FileType};
use crate::{Error, Result};

/// Decode the accumulated GetFileIDs payload (one byte per file).
pub fn decode_file_ids(data: &[u8]) -> Result<Vec<FileId>> {
    if data.len() > MAX_FILE_COUNT {
        return Err(Error::NoRoom {
            capacity: MAX_FILE_COUNT,
            required: data.len(),
        });
    }
    Ok(data.iter().copied().map(FileId::new).collect())
}

/// Settings shared by linear and cyclic record files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordSettings {
    pub record_size: u32,
    pub max_records: u32,
    pub current_records: u32,
}

/// Type-dependent part of [`FileSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileKind {
    StandardData {
        file_size: u32,
    },
    BackupData {
        file_size: u32,
    },
    Value {
        lower_limit: i32,
        upper_limit: i32,
        limited_credit_value: i32,
        limited_credit_enabled: bool,
    },
    LinearRecord(RecordSettings),
    CyclicRecord(RecordSettings),
}

/// Decoded GetFileSettings answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileSettings {
    pub communication_mode: CommunicationMode,
    pub access_rights: AccessRights,
    pub kind: FileKind,
}

impl FileSettings {
    pub fn file_type(&self) -> FileType {
        match self.kind {
            FileKind::StandardData { .. } => FileType::StandardData,
            FileKind::BackupData { .. } => FileType::BackupData,
            FileKind::Value { .. } => FileType::ValueWithBackup,
            FileKind::LinearRecord(_) => FileType::LinearRecordWithBackup,
            FileKind::CyclicRecord(_) => FileType::CyclicRecordWithBackup,
        }
    }

    /// Size in bytes for data files.
    pub fn file_size(&self) -> Option<u32> {
        match self.kind {
            FileKind::StandardData { file_size } | FileKind::BackupData { file_size } => {
                Some(file_size)
            }
            _ => None,
        }
    }
}

// header: type(1) comm(1) access rights(2, LSB first)
const BODY: usize = 4;

fn decode_record(data: &[u8]) -> Result<RecordSettings> {
    Ok(RecordSettings {
        record_size: le_u24_at(data, BODY)?,
        max_records: le_u24_at(data, BODY + 3)?,
        current_records: le_u24_at(data, BODY + 6)?,
    })
}

/// Decode the GetFileSettings payload.
///
/// The file type tag selects the body layout; a tag outside 0..=4 is an
/// [`Error::UnknownFileType`], never a default.
pub fn decode_file_settings(data: &[u8]) -> Result<FileSettings> {
    let tag = byte_at(data, 0)?;
    let file_type = FileType::try_from(tag)?;
    ensure_len(data, BODY)?;
    let communication_mode = CommunicationMode::from_u8(data[1]);
    let access_rights = AccessRights::from_le_bytes(array_at(data, 2)?);

    let kind = match file_type {
        FileType::StandardData => FileKind::StandardData {
            file_size: le_u24_at(data, BODY)?,
        },
        FileType::BackupData => FileKind::BackupData {
            file_size: le_u24_at(data, BODY)?,
        },
        FileType::ValueWithBackup => FileKind::Value {
            lower_limit: le_i32_at(data, BODY)?,
            upper_limit: le_i32_at(data, BODY + 4)?,
            limited_credit_value: le_i32_at(data, BODY + 8)?,
            limited_credit_enabled: byte_at(data, BODY + 12)? != 0,
        },
        FileType::LinearRecordWithBackup => FileKind::LinearRecord(decode_record(data)?),
        FileType::CyclicRecordWithBackup => FileKind::CyclicRecord(decode_record(data)?),
    };

    Ok(FileSettings {
        communication_mode,
        access_rights,
        kind,
    })
}
