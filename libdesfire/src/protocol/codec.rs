// libdesfire/src/protocol/codec.rs

use crate::Result;
use crate::constants::CRC_LEN;

use super::Frame;
use super::commands::Command;
use super::frame::CommandFrame;

/// Encode a Command into an I-block for the given PCB/CID, without CRC.
pub fn encode_command_frame(pcb: u8, cid: u8, cmd: &Command) -> Result<Vec<u8>> {
    let body = cmd.encode()?;
    Ok(Frame::encode(pcb, cid, &body))
}

/// Take a transmitted frame (CRC included) apart into PCB, CID, command
/// code and payload.
pub fn decode_command_frame(frame_with_crc: &[u8]) -> Result<CommandFrame> {
    let end = frame_with_crc.len().saturating_sub(CRC_LEN);
    Frame::decode_command(&frame_with_crc[..end])
}
