// libdesfire/src/device/config.rs

use crate::constants::MAX_CID;
use crate::{Error, Result};

/// Highest frame size integer defined by ISO14443-4 (256 bytes).
const MAX_FSDI: u8 = 8;
/// Highest divisor integer (848 kbit/s).
const MAX_DIVISOR: u8 = 3;

/// Divisor integers sent in PPS1.
///
/// `dsi` selects the card-to-reader rate, `dri` the reader-to-card rate;
/// 0 keeps 106 kbit/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitRates {
    pub dsi: u8,
    pub dri: u8,
}

impl BitRates {
    pub fn pps1(&self) -> u8 {
        ((self.dsi & 0x03) << 2) | (self.dri & 0x03)
    }
}

/// Parameters for ISO14443-4 activation (RATS and optional PPS).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivationConfig {
    pub cid: u8,
    /// Frame size for the reader, 5 means 64 bytes.
    pub fsdi: u8,
    /// Bit rates negotiated with PPS; `None` skips PPS.
    pub pps: Option<BitRates>,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            cid: 0,
            fsdi: 5,
            pps: None,
        }
    }
}

impl ActivationConfig {
    pub fn with_cid(mut self, cid: u8) -> Self {
        self.cid = cid;
        self
    }

    pub fn with_fsdi(mut self, fsdi: u8) -> Self {
        self.fsdi = fsdi;
        self
    }

    pub fn with_pps(mut self, rates: BitRates) -> Self {
        self.pps = Some(rates);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.cid > MAX_CID {
            return Err(Error::InvalidCid(self.cid));
        }
        if self.fsdi > MAX_FSDI {
            return Err(Error::ValueOutOfRange {
                name: "fsdi",
                value: self.fsdi.into(),
                max: MAX_FSDI.into(),
            });
        }
        if let Some(rates) = self.pps {
            for (name, value) in [("dsi", rates.dsi), ("dri", rates.dri)] {
                if value > MAX_DIVISOR {
                    return Err(Error::ValueOutOfRange {
                        name,
                        value: value.into(),
                        max: MAX_DIVISOR.into(),
                    });
                }
            }
        }
        Ok(())
    }

    /// RATS parameter byte: `FSDI << 4 | CID`.
    pub fn rats_param(&self) -> u8 {
        (self.fsdi << 4) | (self.cid & 0x0F)
    }
}
