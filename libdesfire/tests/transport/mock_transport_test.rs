#[path = "../common/mod.rs"]
mod common;

use libdesfire::protocol::crc_a;
use libdesfire::transport::{MockReply, MockTransport, Transport};
use libdesfire::StatusCode;

fn framed(body: &[u8]) -> Vec<u8> {
    let mut v = body.to_vec();
    v.extend_from_slice(&crc_a(body));
    v
}

#[test]
fn mock_transport_echoes_block_header() {
    let mut m = MockTransport::new();
    m.push_reply(StatusCode::AdditionalFrame, &[0x04]);
    let rx = m.transceive(&framed(&[0x0B, 0x05, 0x60]), true).unwrap();
    assert_eq!(rx, vec![0x0B, 0x05, 0xAF, 0x04]);
    assert_eq!(m.sent.len(), 1);
}

#[test]
fn mock_transport_calculates_crc_a() {
    let mut m = MockTransport::new();
    assert_eq!(m.calculate_crc(&[0x00, 0x00]).unwrap(), [0xA0, 0x1E]);
}

#[test]
fn sent_commands_skip_activation_frames() {
    let mut m = MockTransport::new();
    m.replies.push(MockReply::Raw(vec![0x01]));
    m.push_reply(StatusCode::OperationOk, &[]);
    m.request_ats(0x50).unwrap();
    m.transceive(&framed(&[0x0A, 0x00, 0x6A]), true).unwrap();

    assert_eq!(m.sent.len(), 2);
    let cmds = m.sent_commands();
    assert_eq!(cmds.len(), 1);
    assert_eq!(cmds[0].command, 0x6A);
}
