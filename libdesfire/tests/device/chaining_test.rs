#[path = "../common/mod.rs"]
mod common;

use common::*;
use libdesfire::protocol::Command;
use libdesfire::{Error, FileId, StatusCode, TransportError};

#[test]
fn continuation_frames_carry_af_and_toggle_pcb() {
    let (inner, mut device, mut tag) =
        scripted_card(&[more(&[1, 2, 3]), more(&[4, 5, 6]), ok(&[7])]);
    let ex = device
        .exchange_chained(&mut tag, &Command::GetApplicationIds, 84)
        .unwrap();
    assert_eq!(ex.status, StatusCode::OperationOk);
    assert_eq!(ex.data, vec![1, 2, 3, 4, 5, 6, 7]);

    let sent = inner.borrow().sent_commands();
    let codes: Vec<u8> = sent.iter().map(|f| f.command).collect();
    let pcbs: Vec<u8> = sent.iter().map(|f| f.pcb).collect();
    assert_eq!(codes, vec![0x6A, 0xAF, 0xAF]);
    assert_eq!(pcbs, vec![0x0A, 0x0B, 0x0A]);
}

#[test]
fn transport_failure_mid_chain_aborts() {
    let (inner, mut device, mut tag) = scripted_card(&[more(&[1, 2, 3])]);
    inner.borrow_mut().push_error(TransportError::Timeout);

    let res = tag.read_data(&mut device, FileId::new(1), 0, 0);
    assert!(matches!(res, Err(Error::Transport(TransportError::Timeout))));
    // first frame advanced the block number, the failed one did not
    assert_eq!(tag.pcb(), 0x0B);
}

#[test]
fn error_status_ends_chain() {
    let (_inner, mut device, mut tag) =
        scripted_card(&[more(&[1, 2]), (StatusCode::BoundaryError, vec![])]);
    match tag.read_data(&mut device, FileId::new(1), 0, 0) {
        Err(Error::Application {
            command: 0xBD,
            status: StatusCode::BoundaryError,
        }) => {}
        other => panic!("expected boundary error, got {:?}", other),
    }
}
