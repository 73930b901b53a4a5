// libdesfire/src/protocol/responses/key.rs

use crate::protocol::parser::{byte_at, ensure_len};
use crate::Result;

/// Answer to GetKeySettings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySettings {
    /// Key settings bitmask (master key changeable, free listing, ...).
    pub settings: u8,
    /// Raw second byte. The upper bits carry the key type on EV1 cards.
    pub max_keys_raw: u8,
}

impl KeySettings {
    /// Number of keys usable in the selected application.
    pub fn max_keys(&self) -> u8 {
        self.max_keys_raw & 0x0F
    }
}

/// Decode the 2-byte GetKeySettings payload.
pub fn decode_key_settings(data: &[u8]) -> Result<KeySettings> {
    ensure_len(data, 2)?;
    Ok(KeySettings {
        settings: data[0],
        max_keys_raw: data[1],
    })
}

/// Decode the 1-byte GetKeyVersion payload.
pub fn decode_key_version(data: &[u8]) -> Result<u8> {
    byte_at(data, 0)
}
