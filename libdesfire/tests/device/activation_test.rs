#[path = "../common/mod.rs"]
mod common;

use libdesfire::device::{ActivationConfig, BitRates, Device, DeviceBuilder};
use libdesfire::protocol::crc_a;
use libdesfire::test_support::{SAMPLE_ATS, shared_mock};
use libdesfire::{Error, TransportError};

#[test]
fn initialize_sends_rats_and_opens_session() {
    let (inner, transport) = shared_mock();
    inner.borrow_mut().push_response(SAMPLE_ATS.to_vec());

    let device = Device::new_with_transport(transport).unwrap();
    let (_device, tag) = device.initialize().unwrap();

    assert_eq!(inner.borrow().sent[0], hex::decode("e050bca5").unwrap());
    assert_eq!(tag.pcb(), 0x0A);
    assert_eq!(tag.cid(), 0);
    assert!(tag.selected_application().is_master());
    assert!(tag.ats().unwrap().supports_cid());
}

#[test]
fn initialize_with_pps_and_cid() {
    let (inner, transport) = shared_mock();
    inner.borrow_mut().push_response(SAMPLE_ATS.to_vec());
    inner.borrow_mut().push_response(vec![0xD3]);

    let config = ActivationConfig::default()
        .with_cid(3)
        .with_pps(BitRates { dsi: 1, dri: 1 });
    let device = DeviceBuilder::new()
        .with_transport(transport)
        .config(config)
        .build_uninitialized()
        .unwrap();
    let (_device, tag) = device.initialize().unwrap();
    assert_eq!(tag.cid(), 3);

    let sent = &inner.borrow().sent;
    assert_eq!(&sent[0][..2], &[0xE0, 0x53]);
    let mut pps = vec![0xD3, 0x11, 0x05];
    pps.extend_from_slice(&crc_a(&pps));
    assert_eq!(sent[1], pps);
}

#[test]
fn failed_pps_halts_card() {
    let (inner, transport) = shared_mock();
    inner.borrow_mut().push_response(SAMPLE_ATS.to_vec());
    inner.borrow_mut().push_error(TransportError::Collision);

    let config = ActivationConfig::default().with_pps(BitRates::default());
    let device = Device::with_config(transport, config).unwrap();
    match device.initialize() {
        Err(Error::Transport(TransportError::Collision)) => {}
        other => panic!("expected collision, got {:?}", other.map(|_| ())),
    }
    assert_eq!(inner.borrow().halt_count(), 1);
}

#[test]
fn halt_then_reactivate_resets_session() {
    let (inner, transport) = shared_mock();
    inner.borrow_mut().push_response(SAMPLE_ATS.to_vec());
    let (mut device, mut tag) = Device::new_with_transport(transport)
        .unwrap()
        .initialize()
        .unwrap();

    inner
        .borrow_mut()
        .push_reply(libdesfire::StatusCode::OperationOk, &[0x0F, 0x01]);
    tag.get_key_settings(&mut device).unwrap();
    assert_eq!(tag.pcb(), 0x0B);

    let device = device.halt(tag).unwrap();
    inner.borrow_mut().push_response(SAMPLE_ATS.to_vec());
    let (_device, tag) = device.initialize().unwrap();
    assert_eq!(tag.pcb(), 0x0A);
    assert_eq!(inner.borrow().halt_count(), 1);
}
