// fixtures.rs: provides commonly used card answers and scripted sessions

use std::cell::RefCell;
use std::rc::Rc;

use libdesfire::device::{Device, Initialized};
use libdesfire::tag::Tag;
use libdesfire::test_support::activated_shared_device;
use libdesfire::transport::MockTransport;
use libdesfire::StatusCode;

pub type Session = (Rc<RefCell<MockTransport>>, Device<Initialized>, Tag);

/// Activated session whose card answers with `replies` in order.
pub fn scripted_card(replies: &[(StatusCode, Vec<u8>)]) -> Session {
    let (inner, device, tag) = activated_shared_device().unwrap();
    for (status, data) in replies {
        inner.borrow_mut().push_reply(*status, data);
    }
    (inner, device, tag)
}

pub fn ok(data: &[u8]) -> (StatusCode, Vec<u8>) {
    (StatusCode::OperationOk, data.to_vec())
}

pub fn more(data: &[u8]) -> (StatusCode, Vec<u8>) {
    (StatusCode::AdditionalFrame, data.to_vec())
}

/// DESFire EV1 4K hardware block.
pub fn hardware_block() -> Vec<u8> {
    hex::decode("04010101001805").unwrap()
}

pub fn software_block() -> Vec<u8> {
    hex::decode("04010101041805").unwrap()
}

/// UID 04 5A 2B 3C 4D 5E 6F, batch BA 55 C0 FF EE, week 0x21 year 0x13.
pub fn production_frame() -> Vec<u8> {
    hex::decode("045a2b3c4d5e6fba55c0ffee2113").unwrap()
}

pub fn standard_file_settings(size: u32) -> Vec<u8> {
    let mut v = vec![0x00, 0x00, 0xEE, 0xEE];
    v.extend_from_slice(&size.to_le_bytes()[..3]);
    v
}

pub fn value_file_settings(lower: i32, upper: i32, credit: i32, enabled: bool) -> Vec<u8> {
    let mut v = vec![0x02, 0x00, 0x00, 0xE0];
    v.extend_from_slice(&lower.to_le_bytes());
    v.extend_from_slice(&upper.to_le_bytes());
    v.extend_from_slice(&credit.to_le_bytes());
    v.push(enabled as u8);
    v
}

pub fn linear_record_settings(size: u32, max: u32, current: u32) -> Vec<u8> {
    let mut v = vec![0x03, 0x03, 0x12, 0x34];
    for n in [size, max, current] {
        v.extend_from_slice(&n.to_le_bytes()[..3]);
    }
    v
}

pub fn sample_data(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i & 0xff) as u8).collect()
}
