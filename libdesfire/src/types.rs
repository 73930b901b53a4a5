// libdesfire/src/types.rs

use crate::Error;
use crate::constants::AID_LEN;
use derive_more::{Display, From, Into};
use std::str::FromStr;

/// AID - Newtype Pattern (3 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aid([u8; AID_LEN]);

impl Aid {
    /// PICC level (no application selected).
    pub const MASTER: Self = Self([0x00; AID_LEN]);

    pub const fn from_bytes(bytes: [u8; AID_LEN]) -> Self {
        Self(bytes)
    }

    /// Build an AID from its 24-bit numeric form, stored LSB first.
    pub fn from_u32(value: u32) -> Result<Self, Error> {
        if value > 0x00FF_FFFF {
            return Err(Error::ValueOutOfRange {
                name: "aid",
                value,
                max: 0x00FF_FFFF,
            });
        }
        let b = value.to_le_bytes();
        Ok(Self([b[0], b[1], b[2]]))
    }

    pub fn as_u32(&self) -> u32 {
        u32::from_le_bytes([self.0[0], self.0[1], self.0[2], 0])
    }

    pub fn as_bytes(&self) -> &[u8; AID_LEN] {
        &self.0
    }

    pub fn is_master(&self) -> bool {
        *self == Self::MASTER
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Aid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != AID_LEN {
            return Err(Error::InvalidLength {
                expected: AID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; AID_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Parses the wire byte order as hex, e.g. `"00 00 01"`.
impl FromStr for Aid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = crate::utils::parse_hex(s).map_err(|_| Error::InvalidLength {
            expected: AID_LEN,
            actual: 0,
        })?;
        Self::try_from(&bytes[..])
    }
}

/// File number inside the selected application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "{:#04x}", _0)]
pub struct FileId(u8);

impl FileId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// FileType
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    #[display(fmt = "Standard data file.")]
    StandardData = 0x00,
    #[display(fmt = "Backup data file.")]
    BackupData = 0x01,
    #[display(fmt = "Value file with backup.")]
    ValueWithBackup = 0x02,
    #[display(fmt = "Linear record file with backup.")]
    LinearRecordWithBackup = 0x03,
    #[display(fmt = "Cyclic record file with backup.")]
    CyclicRecordWithBackup = 0x04,
}

impl FileType {
    pub fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0x00 => Some(Self::StandardData),
            0x01 => Some(Self::BackupData),
            0x02 => Some(Self::ValueWithBackup),
            0x03 => Some(Self::LinearRecordWithBackup),
            0x04 => Some(Self::CyclicRecordWithBackup),
            _ => None,
        }
    }

    /// Name of a raw file type tag, "Unknown file type." when undefined.
    pub fn name_of(tag: u8) -> String {
        match Self::from_u8(tag) {
            Some(t) => t.to_string(),
            None => "Unknown file type.".to_string(),
        }
    }
}

impl TryFrom<u8> for FileType {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_u8(tag).ok_or(Error::UnknownFileType(tag))
    }
}

/// CommunicationMode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommunicationMode {
    #[display(fmt = "Plain Communication.")]
    Plain,
    #[display(fmt = "Plain Comm secured by DES/3DES MACing.")]
    Maced,
    #[display(fmt = "Fully DES/3DES enciphered comm.")]
    Enciphered,
    #[display(fmt = "Unknown communication mode.")]
    Other(u8),
}

impl CommunicationMode {
    pub fn from_u8(mode: u8) -> Self {
        match mode {
            0x00 => Self::Plain,
            0x01 => Self::Maced,
            0x03 => Self::Enciphered,
            other => Self::Other(other),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Plain => 0x00,
            Self::Maced => 0x01,
            Self::Enciphered => 0x03,
            Self::Other(mode) => *mode,
        }
    }

    pub fn name_of(mode: u8) -> String {
        Self::from_u8(mode).to_string()
    }
}

/// Access rights (u16), four key-number nibbles.
///
/// Layout: `read | write | read&write | change`, most significant nibble
/// first. Key 0xE means free access, 0xF denies the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessRights(u16);

impl AccessRights {
    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn read_key(&self) -> u8 {
        ((self.0 >> 12) & 0x0F) as u8
    }

    pub fn write_key(&self) -> u8 {
        ((self.0 >> 8) & 0x0F) as u8
    }

    pub fn read_write_key(&self) -> u8 {
        ((self.0 >> 4) & 0x0F) as u8
    }

    pub fn change_key(&self) -> u8 {
        (self.0 & 0x0F) as u8
    }
}
