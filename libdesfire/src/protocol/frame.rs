// libdesfire/src/protocol/frame.rs

use crate::constants::{
    PCB_BLOCK_0, PCB_BLOCK_1, PCB_BLOCK_NUMBER, PCB_CHAINING, PCB_CID_FOLLOWING, PCB_I_BLOCK,
    PCB_I_BLOCK_MASK, PCB_NAD_FOLLOWING,
};
use crate::status::{StatusCode, TransportError};
use crate::{Error, Result};

/// ISO14443-4 I-block helper for DESFire native commands.
///
/// Request:  `[PCB] [CID] [Command] [Data(n)]` (CRC_A appended by the caller)
/// Response: `[PCB] [CID]? [NAD]? [Status] [Data(n)]` (CRC_A already checked
/// and stripped by the transport)
///
/// Whether the CID/NAD bytes are present is read from the response PCB
/// rather than assumed, so the envelope size follows the card.
pub struct Frame;

/// A command frame taken apart again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame {
    pub pcb: u8,
    pub cid: u8,
    pub command: u8,
    pub payload: Vec<u8>,
}

/// A response frame after envelope stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    pub pcb: u8,
    pub cid: Option<u8>,
    pub status: StatusCode,
    pub data: Vec<u8>,
}

/// Next PCB in the 0x0A/0x0B alternation. Anything else restarts at 0x0A.
pub fn toggle_pcb(pcb: u8) -> u8 {
    if pcb == PCB_BLOCK_0 {
        PCB_BLOCK_1
    } else {
        PCB_BLOCK_0
    }
}

impl Frame {
    /// Build `[PCB][CID][command...]` where `command` already starts with
    /// the DESFire command code.
    pub fn encode(pcb: u8, cid: u8, command: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 + command.len() + crate::constants::CRC_LEN);
        out.push(pcb);
        out.push(cid);
        out.extend_from_slice(command);
        out
    }

    /// Split a command frame (without CRC) back into its fields.
    pub fn decode_command(frame: &[u8]) -> Result<CommandFrame> {
        if frame.len() < 3 {
            return Err(Error::InvalidLength {
                expected: 3,
                actual: frame.len(),
            });
        }
        Ok(CommandFrame {
            pcb: frame[0],
            cid: frame[1],
            command: frame[2],
            payload: frame[3..].to_vec(),
        })
    }

    /// Strip the I-block envelope of a response to a block sent with
    /// `sent_pcb`. Envelope defects are transport-tier errors.
    pub fn decode_response(frame: &[u8], sent_pcb: u8) -> Result<ResponseFrame> {
        let pcb = *frame
            .first()
            .ok_or(TransportError::IncompleteFrame { len: 0 })?;

        if pcb & PCB_I_BLOCK_MASK != PCB_I_BLOCK || pcb & PCB_CHAINING != 0 {
            return Err(TransportError::UnexpectedBlock { pcb }.into());
        }
        if pcb & PCB_BLOCK_NUMBER != sent_pcb & PCB_BLOCK_NUMBER {
            return Err(TransportError::UnexpectedBlock { pcb }.into());
        }

        let mut idx = 1usize;
        let cid = if pcb & PCB_CID_FOLLOWING != 0 {
            idx += 1;
            Some(*frame.get(1).ok_or(TransportError::IncompleteFrame {
                len: frame.len(),
            })?)
        } else {
            None
        };
        if pcb & PCB_NAD_FOLLOWING != 0 {
            idx += 1;
        }

        let status = *frame.get(idx).ok_or(TransportError::IncompleteFrame {
            len: frame.len(),
        })?;

        Ok(ResponseFrame {
            pcb,
            cid,
            status: StatusCode::from_u8(status),
            data: frame[idx + 1..].to_vec(),
        })
    }
}
