// libdesfire/src/transport/mock.rs

use crate::constants::{PCB_I_BLOCK, PCB_I_BLOCK_MASK};
use crate::protocol::checksum::{crc_a, crc_a_matches};
use crate::protocol::codec::decode_command_frame;
use crate::protocol::frame::CommandFrame;
use crate::status::{StatusCode, TransportError};
use crate::transport::traits::{Transport, TransportResult};

/// One scripted answer of a [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Returned verbatim (CRC already stripped).
    Raw(Vec<u8>),
    /// I-block answer echoing the PCB and CID of the request, followed by
    /// `status` and `data`.
    Echo { status: StatusCode, data: Vec<u8> },
    /// Transport failure for this round trip.
    Fail(TransportError),
}

/// Mock transport for unit tests. It records sent frames and returns queued
/// replies in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub replies: Vec<MockReply>,
    /// Testing hook: number of CRC-checked receives that should fail
    pub crc_failures: usize,
    halts: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.replies.push(MockReply::Raw(resp));
    }

    /// Queue a DESFire answer with the given status byte and data.
    pub fn push_reply(&mut self, status: StatusCode, data: &[u8]) {
        self.replies.push(MockReply::Echo {
            status,
            data: data.to_vec(),
        });
    }

    pub fn push_error(&mut self, err: TransportError) {
        self.replies.push(MockReply::Fail(err));
    }

    /// Set how many subsequent CRC-checked receives should fail (for tests).
    pub fn set_crc_failures(&mut self, n: usize) {
        self.crc_failures = n;
    }

    pub fn halt_count(&self) -> usize {
        self.halts
    }

    /// I-blocks sent so far, taken apart. RATS/PPS frames are skipped.
    pub fn sent_commands(&self) -> Vec<CommandFrame> {
        self.sent
            .iter()
            .filter(|f| f.first().is_some_and(|pcb| pcb & PCB_I_BLOCK_MASK == PCB_I_BLOCK))
            .filter_map(|f| decode_command_frame(f).ok())
            .collect()
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.len()
    }
}

impl Transport for MockTransport {
    fn calculate_crc(&mut self, data: &[u8]) -> TransportResult<[u8; 2]> {
        Ok(crc_a(data))
    }

    fn transceive(&mut self, tx: &[u8], check_crc: bool) -> TransportResult<Vec<u8>> {
        self.sent.push(tx.to_vec());
        // a card stays silent on a corrupted frame
        if !crc_a_matches(tx) {
            return Err(TransportError::Timeout);
        }
        if self.replies.is_empty() {
            return Err(TransportError::Timeout);
        }
        let reply = self.replies.remove(0);
        if check_crc && self.crc_failures > 0 {
            self.crc_failures -= 1;
            return Err(TransportError::CrcMismatch);
        }
        match reply {
            MockReply::Raw(bytes) => Ok(bytes),
            MockReply::Echo { status, data } => {
                let mut rx = Vec::with_capacity(3 + data.len());
                rx.extend_from_slice(&tx[..2.min(tx.len())]);
                rx.push(status.as_u8());
                rx.extend_from_slice(&data);
                Ok(rx)
            }
            MockReply::Fail(e) => Err(e),
        }
    }

    fn halt(&mut self) -> TransportResult<()> {
        self.halts += 1;
        Ok(())
    }
}
