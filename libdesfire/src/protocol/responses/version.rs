// libdesfire/src/protocol/responses/version.rs

use crate::constants::{BATCH_NUMBER_LEN, UID_LEN, VERSION_BLOCK_LEN, VERSION_PRODUCTION_LEN};
use crate::protocol::parser::{array_at, ensure_len};

/// Hardware or software descriptor, one per GetVersion frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionBlock {
    pub vendor_id: u8,
    pub kind: u8,
    pub subtype: u8,
    pub version_major: u8,
    pub version_minor: u8,
    pub storage_size: u8,
    pub protocol: u8,
}

impl VersionBlock {
    /// NXP Semiconductors vendor id.
    pub const VENDOR_NXP: u8 = 0x04;

    /// Storage size in bytes for the codes DESFire cards report.
    pub fn storage_bytes(&self) -> Option<u32> {
        match self.storage_size {
            0x16 => Some(2048),
            0x18 => Some(4096),
            0x1A => Some(8192),
            _ => None,
        }
    }

    pub fn is_nxp(&self) -> bool {
        self.vendor_id == Self::VENDOR_NXP
    }
}

/// UID, batch and production date from the third GetVersion frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductionInfo {
    pub uid: [u8; UID_LEN],
    pub batch_number: [u8; BATCH_NUMBER_LEN],
    pub production_week: u8,
    pub production_year: u8,
}

/// Result of GetVersion.
///
/// `software` and `production` stay `None` when the card stopped chaining
/// before sending them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionInfo {
    pub hardware: VersionBlock,
    pub software: Option<VersionBlock>,
    pub production: Option<ProductionInfo>,
}

impl VersionInfo {
    /// True once all three frames were received.
    pub fn is_complete(&self) -> bool {
        self.software.is_some() && self.production.is_some()
    }
}

/// Decode a 7-byte hardware/software block.
pub fn decode_version_block(data: &[u8]) -> crate::Result<VersionBlock> {
    let b: [u8; VERSION_BLOCK_LEN] = array_at(data, 0)?;
    Ok(VersionBlock {
        vendor_id: b[0],
        kind: b[1],
        subtype: b[2],
        version_major: b[3],
        version_minor: b[4],
        storage_size: b[5],
        protocol: b[6],
    })
}

/// Decode the 14-byte UID / batch / production date frame.
pub fn decode_production_info(data: &[u8]) -> crate::Result<ProductionInfo> {
    ensure_len(data, VERSION_PRODUCTION_LEN)?;
    Ok(ProductionInfo {
        uid: array_at(data, 0)?,
        batch_number: array_at(data, UID_LEN)?,
        production_week: data[UID_LEN + BATCH_NUMBER_LEN],
        production_year: data[UID_LEN + BATCH_NUMBER_LEN + 1],
    })
}

/// Decode the concatenated GetVersion frames. Blocks missing from the
/// tail of `data` are reported as `None`.
pub fn decode_version(data: &[u8]) -> crate::Result<VersionInfo> {
    let hardware = decode_version_block(data)?;
    let software = match data.get(VERSION_BLOCK_LEN..) {
        Some(rest) if !rest.is_empty() => Some(decode_version_block(rest)?),
        _ => None,
    };
    let production = match data.get(2 * VERSION_BLOCK_LEN..) {
        Some(rest) if !rest.is_empty() => Some(decode_production_info(rest)?),
        _ => None,
    };
    Ok(VersionInfo {
        hardware,
        software,
        production,
    })
}
