#[path = "../common/mod.rs"]
mod common;

use common::*;
use libdesfire::protocol::responses::FileKind;
use libdesfire::{Error, ErrorTier, FileId, StatusCode};
use proptest::prelude::*;

#[test]
fn get_file_settings_value_file() {
    let (_inner, mut device, mut tag) =
        scripted_card(&[ok(&value_file_settings(0, 1000, 0, true))]);
    let fs = tag.get_file_settings(&mut device, FileId::new(4)).unwrap();
    assert!(matches!(
        fs.kind,
        FileKind::Value {
            upper_limit: 1000,
            limited_credit_enabled: true,
            ..
        }
    ));
}

#[test]
fn get_file_settings_missing_file() {
    let (_inner, mut device, mut tag) = scripted_card(&[(StatusCode::FileNotFound, vec![])]);
    let err = tag
        .get_file_settings(&mut device, FileId::new(9))
        .unwrap_err();
    assert_eq!(err.tier(), ErrorTier::Application);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn unknown_file_type_is_decode_tier(tag_byte in 5u8..=255) {
        let mut body = vec![tag_byte, 0x00, 0xEE, 0xEE];
        body.extend_from_slice(&[0u8; 13]);
        let (_inner, mut device, mut tag) = scripted_card(&[ok(&body)]);
        let err = tag.get_file_settings(&mut device, FileId::new(1)).unwrap_err();
        prop_assert!(matches!(err, Error::UnknownFileType(t) if t == tag_byte));
        prop_assert_eq!(err.tier(), ErrorTier::Decode);
    }
}
