#[path = "../common/mod.rs"]
mod common;

use common::*;
use libdesfire::{Error, StatusCode};

#[test]
fn get_version_three_frames() {
    let (inner, mut device, mut tag) = scripted_card(&[
        more(&hardware_block()),
        more(&software_block()),
        ok(&production_frame()),
    ]);
    let info = tag.get_version(&mut device).unwrap();
    assert!(info.is_complete());
    assert_eq!(info.hardware.storage_bytes(), Some(4096));
    assert_eq!(info.software.unwrap().version_minor, 0x04);
    assert_eq!(
        info.production.unwrap().batch_number,
        [0xBA, 0x55, 0xC0, 0xFF, 0xEE]
    );

    let codes: Vec<u8> = inner
        .borrow()
        .sent_commands()
        .iter()
        .map(|f| f.command)
        .collect();
    assert_eq!(codes, vec![0x60, 0xAF, 0xAF]);
}

#[test]
fn get_version_stopping_after_first_frame() {
    let (inner, mut device, mut tag) = scripted_card(&[ok(&hardware_block())]);
    let info = tag.get_version(&mut device).unwrap();
    assert_eq!(info.hardware.vendor_id, 0x04);
    assert!(info.software.is_none());
    assert!(info.production.is_none());
    assert!(!info.is_complete());
    assert_eq!(inner.borrow().sent_commands().len(), 1);
}

#[test]
fn get_version_stopping_after_second_frame() {
    let (_inner, mut device, mut tag) =
        scripted_card(&[more(&hardware_block()), ok(&software_block())]);
    let info = tag.get_version(&mut device).unwrap();
    assert!(info.software.is_some());
    assert!(info.production.is_none());
}

#[test]
fn get_version_extra_frame_is_tolerated() {
    let (inner, mut device, mut tag) = scripted_card(&[
        more(&hardware_block()),
        more(&software_block()),
        more(&production_frame()),
    ]);
    let info = tag.get_version(&mut device).unwrap();
    assert!(info.is_complete());
    // no fourth request is sent
    assert_eq!(inner.borrow().sent_commands().len(), 3);
}

#[test]
fn get_version_error_status() {
    let (_inner, mut device, mut tag) =
        scripted_card(&[more(&hardware_block()), (StatusCode::CommandAborted, vec![])]);
    match tag.get_version(&mut device) {
        Err(Error::Application {
            command: 0xAF,
            status: StatusCode::CommandAborted,
        }) => {}
        other => panic!("expected application error, got {:?}", other),
    }
}
