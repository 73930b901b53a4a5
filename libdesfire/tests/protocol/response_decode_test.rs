#[path = "../common/mod.rs"]
mod common;

use common::*;
use libdesfire::protocol::responses::{FileKind, RecordSettings};
use libdesfire::protocol::{Response, decode_file_settings, decode_version};
use libdesfire::{CommunicationMode, Error, ErrorTier, FileType};
use proptest::prelude::*;

#[test]
fn decode_value_file_settings() {
    let fs = decode_file_settings(&value_file_settings(-10, 500, 20, false)).unwrap();
    assert_eq!(fs.file_type(), FileType::ValueWithBackup);
    assert_eq!(fs.access_rights.read_key(), 0xE);
    assert_eq!(
        fs.kind,
        FileKind::Value {
            lower_limit: -10,
            upper_limit: 500,
            limited_credit_value: 20,
            limited_credit_enabled: false,
        }
    );
}

#[test]
fn decode_linear_record_settings() {
    let fs = decode_file_settings(&linear_record_settings(0x20, 0x0100, 7)).unwrap();
    assert_eq!(fs.communication_mode, CommunicationMode::Enciphered);
    assert_eq!(fs.access_rights.as_u16(), 0x3412);
    assert_eq!(
        fs.kind,
        FileKind::LinearRecord(RecordSettings {
            record_size: 0x20,
            max_records: 0x0100,
            current_records: 7,
        })
    );
}

#[test]
fn decode_standard_file_size_is_24_bit() {
    let fs = decode_file_settings(&standard_file_settings(0x01_0203)).unwrap();
    assert_eq!(fs.file_size(), Some(0x01_0203));
}

#[test]
fn decode_version_frames() {
    let mut data = hardware_block();
    data.extend(software_block());
    data.extend(production_frame());
    let info = decode_version(&data).unwrap();
    assert!(info.is_complete());
    let production = info.production.unwrap();
    assert_eq!(production.uid, [0x04, 0x5A, 0x2B, 0x3C, 0x4D, 0x5E, 0x6F]);
    assert_eq!(production.production_week, 0x21);
    assert_eq!(production.production_year, 0x13);
}

#[test]
fn response_dispatch_by_command_code() {
    match Response::decode(0xF5, &standard_file_settings(32)).unwrap() {
        Response::FileSettings(fs) => assert_eq!(fs.file_size(), Some(32)),
        other => panic!("unexpected {:?}", other),
    }
    match Response::decode(0x6F, &[1, 2, 0x1F]).unwrap() {
        Response::FileIds(ids) => assert_eq!(ids.len(), 3),
        other => panic!("unexpected {:?}", other),
    }
}

proptest! {
    #[test]
    fn unknown_file_type_never_defaults(
        tag in 5u8..=255,
        body in prop::collection::vec(any::<u8>(), 3..24),
    ) {
        let mut data = vec![tag];
        data.extend(body);
        let err = decode_file_settings(&data).unwrap_err();
        prop_assert!(matches!(err, Error::UnknownFileType(t) if t == tag));
        prop_assert_eq!(err.tier(), ErrorTier::Decode);
    }
}
