//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::device::{Device, Initialized};
use crate::status::TransportError;
use crate::tag::Tag;
use crate::transport::{MockTransport, Transport, TransportResult};
use crate::Result;

/// ATS of a DESFire EV1: FSCI 5, TA/TB/TC present, CID supported.
#[doc(hidden)]
pub const SAMPLE_ATS: [u8; 6] = [0x06, 0x75, 0x77, 0x81, 0x02, 0x80];

/// Transport wrapper that delegates into a shared MockTransport so a test
/// can inspect sent frames after the Device took ownership.
#[doc(hidden)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedTransport {
    pub fn new(inner: Rc<RefCell<MockTransport>>) -> Self {
        Self { inner }
    }
}

impl Transport for SharedTransport {
    fn calculate_crc(&mut self, data: &[u8]) -> TransportResult<[u8; 2]> {
        self.inner.borrow_mut().calculate_crc(data)
    }

    fn transceive(&mut self, tx: &[u8], check_crc: bool) -> TransportResult<Vec<u8>> {
        self.inner.borrow_mut().transceive(tx, check_crc)
    }

    fn halt(&mut self) -> std::result::Result<(), TransportError> {
        self.inner.borrow_mut().halt()
    }
}

/// A fresh MockTransport and a boxed Transport sharing it.
#[doc(hidden)]
pub fn shared_mock() -> (Rc<RefCell<MockTransport>>, Box<dyn Transport>) {
    let inner = Rc::new(RefCell::new(MockTransport::new()));
    let boxed: Box<dyn Transport> = Box::new(SharedTransport::new(inner.clone()));
    (inner, boxed)
}

/// Queue the answer to RATS so `Device::initialize` succeeds.
#[doc(hidden)]
pub fn seed_activation(mock: &mut MockTransport) {
    mock.push_response(SAMPLE_ATS.to_vec());
}

/// Convenience: activate a card on a MockTransport pre-seeded with the ATS
/// and the provided DESFire answers.
#[doc(hidden)]
pub fn activated_mock_device(mut mock: MockTransport) -> Result<(Device<Initialized>, Tag)> {
    mock.replies.insert(0, crate::transport::MockReply::Raw(SAMPLE_ATS.to_vec()));
    Device::new_with_transport(Box::new(mock))?.initialize()
}

/// Like [`activated_mock_device`] but keeps a handle on the mock so tests
/// can queue answers and inspect the frames sent.
#[doc(hidden)]
pub fn activated_shared_device() -> Result<(Rc<RefCell<MockTransport>>, Device<Initialized>, Tag)>
{
    let (inner, boxed) = shared_mock();
    seed_activation(&mut inner.borrow_mut());
    let (device, tag) = Device::new_with_transport(boxed)?.initialize()?;
    Ok((inner, device, tag))
}
