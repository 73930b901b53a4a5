// libdesfire/src/transport/traits.rs

use crate::constants::{PPS_START, RATS};
use crate::status::TransportError;

pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Transport trait abstracts the reader chip away from the DESFire layer.
///
/// Implementors own RF field control, FIFO handling and anticollision. The
/// protocol layer only needs a CRC generator and a half-duplex transceive
/// primitive; ISO14443-4 activation is provided on top of those.
pub trait Transport {
    /// Compute CRC_A over `data`, low byte first.
    fn calculate_crc(&mut self, data: &[u8]) -> TransportResult<[u8; 2]>;

    /// Send `tx` (CRC already appended) and return the answer with its CRC
    /// stripped. When `check_crc` is set the answer CRC must be verified
    /// and a mismatch reported as [`TransportError::CrcMismatch`].
    fn transceive(&mut self, tx: &[u8], check_crc: bool) -> TransportResult<Vec<u8>>;

    /// Send HLTA and put the card to sleep.
    fn halt(&mut self) -> TransportResult<()>;

    /// Request for Answer To Select. `param` is `FSDI << 4 | CID`.
    fn request_ats(&mut self, param: u8) -> TransportResult<Vec<u8>> {
        let mut tx = vec![RATS, param];
        let crc = self.calculate_crc(&tx)?;
        tx.extend_from_slice(&crc);
        self.transceive(&tx, true)
    }

    /// Protocol and Parameter Selection. The card confirms by echoing the
    /// PPSS byte.
    fn protocol_and_parameter_selection(
        &mut self,
        cid: u8,
        pps0: u8,
        pps1: u8,
    ) -> TransportResult<()> {
        let ppss = PPS_START | (cid & 0x0F);
        let mut tx = vec![ppss, pps0, pps1];
        let crc = self.calculate_crc(&tx)?;
        tx.extend_from_slice(&crc);
        let rx = self.transceive(&tx, true)?;
        match rx.first() {
            Some(&b) if b == ppss => Ok(()),
            Some(&b) => Err(TransportError::UnexpectedBlock { pcb: b }),
            None => Err(TransportError::IncompleteFrame { len: 0 }),
        }
    }
}
