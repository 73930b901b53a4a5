// libdesfire/src/protocol/responses/ats.rs

use crate::protocol::parser::byte_at;
use crate::Result;

const T0_TA_PRESENT: u8 = 0x10;
const T0_TB_PRESENT: u8 = 0x20;
const T0_TC_PRESENT: u8 = 0x40;
const TC_CID_SUPPORTED: u8 = 0x02;

const FSC_TABLE: [u16; 9] = [16, 24, 32, 40, 48, 64, 96, 128, 256];

/// Answer To Select, as returned by RATS (CRC already stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ats {
    pub tl: u8,
    pub t0: u8,
    pub ta: Option<u8>,
    pub tb: Option<u8>,
    pub tc: Option<u8>,
    pub historical: Vec<u8>,
}

impl Ats {
    /// Maximum frame size the card accepts.
    pub fn fsc(&self) -> u16 {
        let fsci = (self.t0 & 0x0F) as usize;
        FSC_TABLE.get(fsci).copied().unwrap_or(256)
    }

    pub fn supports_cid(&self) -> bool {
        self.tc.is_some_and(|tc| tc & TC_CID_SUPPORTED != 0)
    }

    /// Frame waiting time integer (defaults to 4 when TB is absent).
    pub fn fwi(&self) -> u8 {
        self.tb.map_or(4, |tb| tb >> 4)
    }
}

/// Decode an ATS. Only the length byte is mandatory; a bare `TL = 1`
/// answer gets the ISO14443-4 default T0 of 0x02.
pub fn decode_ats(data: &[u8]) -> Result<Ats> {
    let tl = byte_at(data, 0)?;
    let end = (tl as usize).min(data.len());
    let body = &data[..end];

    let t0 = body.get(1).copied().unwrap_or(0x02);
    let mut idx = 2;
    let mut next = |present: bool| -> Result<Option<u8>> {
        if !present {
            return Ok(None);
        }
        let b = byte_at(body, idx)?;
        idx += 1;
        Ok(Some(b))
    };
    let ta = next(body.len() > 1 && t0 & T0_TA_PRESENT != 0)?;
    let tb = next(body.len() > 1 && t0 & T0_TB_PRESENT != 0)?;
    let tc = next(body.len() > 1 && t0 & T0_TC_PRESENT != 0)?;
    let historical = body.get(idx..).map(<[u8]>::to_vec).unwrap_or_default();

    Ok(Ats {
        tl,
        t0,
        ta,
        tb,
        tc,
        historical,
    })
}
