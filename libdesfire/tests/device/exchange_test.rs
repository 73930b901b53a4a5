#[path = "../common/mod.rs"]
mod common;

use common::*;
use libdesfire::{Aid, Error, ErrorTier, StatusCode, TransportError};

#[test]
fn select_master_then_key_settings_alternates_pcb() {
    let (inner, mut device, mut tag) = scripted_card(&[ok(&[]), ok(&[0x0F, 0x01])]);

    tag.select_application(&mut device, Aid::MASTER).unwrap();
    let ks = tag.get_key_settings(&mut device).unwrap();
    assert_eq!(ks.max_keys(), 1);

    let sent = inner.borrow().sent_commands();
    assert_eq!(sent[0].pcb, 0x0A);
    assert_eq!(sent[0].command, 0x5A);
    assert_eq!(sent[0].payload, vec![0x00, 0x00, 0x00]);
    assert_eq!(sent[1].pcb, 0x0B);
    assert_eq!(sent[1].command, 0x45);
}

#[test]
fn pcb_alternates_across_many_exchanges() {
    let replies: Vec<_> = (0..7).map(|_| ok(&[0x01])).collect();
    let (inner, mut device, mut tag) = scripted_card(&replies);
    for key in 0..7 {
        tag.get_key_version(&mut device, key).unwrap();
    }
    let pcbs: Vec<u8> = inner.borrow().sent_commands().iter().map(|f| f.pcb).collect();
    assert_eq!(pcbs, vec![0x0A, 0x0B, 0x0A, 0x0B, 0x0A, 0x0B, 0x0A]);
}

#[test]
fn application_status_is_surfaced_verbatim() {
    let (_inner, mut device, mut tag) =
        scripted_card(&[(StatusCode::ApplicationNotFound, vec![])]);
    let aid = Aid::from_u32(0x12_3456).unwrap();
    let err = tag.select_application(&mut device, aid).unwrap_err();
    assert_eq!(err.tier(), ErrorTier::Application);
    assert!(matches!(
        err,
        Error::Application {
            command: 0x5A,
            status: StatusCode::ApplicationNotFound
        }
    ));
    assert!(tag.selected_application().is_master());
}

#[test]
fn transport_failure_leaves_session_untouched() {
    let (inner, mut device, mut tag) = scripted_card(&[]);
    inner.borrow_mut().push_error(TransportError::Timeout);
    inner.borrow_mut().push_reply(StatusCode::OperationOk, &[0x0F, 0x01]);

    let err = tag.get_key_settings(&mut device).unwrap_err();
    assert_eq!(err.tier(), ErrorTier::Transport);
    assert_eq!(tag.pcb(), 0x0A);

    // restarting the command reuses the block number
    tag.get_key_settings(&mut device).unwrap();
    let sent = inner.borrow().sent_commands();
    assert_eq!(sent[0].pcb, sent[1].pcb);
}

#[test]
fn crc_mismatch_on_receive_is_transport_tier() {
    let (inner, mut device, mut tag) = scripted_card(&[ok(&[0x01])]);
    inner.borrow_mut().set_crc_failures(1);
    let err = tag.get_key_version(&mut device, 0).unwrap_err();
    assert!(matches!(err, Error::Transport(TransportError::CrcMismatch)));
    assert_eq!(tag.pcb(), 0x0A);
}

#[test]
fn short_answer_is_transport_integrity_error() {
    let (inner, mut device, mut tag) = scripted_card(&[]);
    inner.borrow_mut().push_response(vec![0x0A, 0x00]);
    let err = tag.get_key_settings(&mut device).unwrap_err();
    assert!(matches!(
        err,
        Error::Transport(TransportError::IncompleteFrame { .. })
    ));
}
