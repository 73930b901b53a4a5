//! Dump a scripted DESFire EV1 card through the MockTransport.
//!
//! Run with `RUST_LOG=trace cargo run --example dump_mock_card` to see every
//! frame exchanged with the card.

use anyhow::Result;
use libdesfire::dump::{dump_application, dump_master_key, dump_version};
use libdesfire::prelude::*;
use libdesfire::test_support::SAMPLE_ATS;

fn script_card(mock: &mut MockTransport) {
    mock.push_response(SAMPLE_ATS.to_vec());

    // GetVersion
    mock.push_reply(StatusCode::AdditionalFrame, &[0x04, 0x01, 0x01, 0x01, 0x00, 0x18, 0x05]);
    mock.push_reply(StatusCode::AdditionalFrame, &[0x04, 0x01, 0x01, 0x01, 0x04, 0x18, 0x05]);
    mock.push_reply(
        StatusCode::OperationOk,
        &[
            0x04, 0x5A, 0x2B, 0x3C, 0x4D, 0x5E, 0x6F, 0xBA, 0x55, 0xC0, 0xFF, 0xEE, 0x21, 0x13,
        ],
    );

    // master key: select, key settings, one key version
    mock.push_reply(StatusCode::OperationOk, &[]);
    mock.push_reply(StatusCode::OperationOk, &[0x0F, 0x01]);
    mock.push_reply(StatusCode::OperationOk, &[0x00]);

    // GetApplicationIDs: one application
    mock.push_reply(StatusCode::OperationOk, &[0x20, 0x81, 0xF4]);

    // application: select, key settings, file ids, key version
    mock.push_reply(StatusCode::OperationOk, &[]);
    mock.push_reply(StatusCode::OperationOk, &[0x0B, 0x01]);
    mock.push_reply(StatusCode::OperationOk, &[0x00, 0x01]);
    mock.push_reply(StatusCode::OperationOk, &[0x01]);

    // file 0: 24 byte standard data file, read in two frames
    mock.push_reply(StatusCode::OperationOk, &[0x00, 0x00, 0xEE, 0xEE, 0x18, 0x00, 0x00]);
    mock.push_reply(StatusCode::AdditionalFrame, b"libdesfire mock ");
    mock.push_reply(StatusCode::OperationOk, b"card dat");

    // file 1: value file
    let mut value = vec![0x02, 0x00, 0x00, 0xE0];
    for n in [0i32, 1000, 0] {
        value.extend_from_slice(&n.to_le_bytes());
    }
    value.push(0x00);
    mock.push_reply(StatusCode::OperationOk, &value);
    mock.push_reply(StatusCode::OperationOk, &250i32.to_le_bytes());
}

fn main() -> Result<()> {
    env_logger::init();

    let mut mock = MockTransport::new();
    script_card(&mut mock);

    let device = DeviceBuilder::new()
        .with_transport(Box::new(mock))
        .build_uninitialized()?;
    let (mut device, mut tag) = device.initialize()?;

    let version = tag.get_version(&mut device)?;
    print!("{}", dump_version(&version));
    print!("{}", dump_master_key(&mut tag, &mut device)?);

    for aid in tag.get_application_ids(&mut device)? {
        print!("{}", dump_application(&mut tag, &mut device, aid)?);
    }

    device.halt(tag)?;
    Ok(())
}
