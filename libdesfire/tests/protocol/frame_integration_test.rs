#[path = "../common/mod.rs"]
mod common;

use libdesfire::protocol::codec::{decode_command_frame, encode_command_frame};
use libdesfire::protocol::{Command, Frame, crc_a};
use libdesfire::{Aid, FileId, StatusCode};
use proptest::prelude::*;

fn sample_commands() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::GetVersion),
        Just(Command::AdditionalFrame),
        Just(Command::GetApplicationIds),
        Just(Command::GetFileIds),
        Just(Command::GetKeySettings),
        any::<[u8; 3]>().prop_map(|b| Command::SelectApplication {
            aid: Aid::from_bytes(b)
        }),
        any::<u8>().prop_map(|f| Command::GetFileSettings {
            file: FileId::new(f)
        }),
        any::<u8>().prop_map(|key| Command::GetKeyVersion { key }),
        any::<u8>().prop_map(|f| Command::GetValue {
            file: FileId::new(f)
        }),
        (any::<u8>(), 0u32..=0xFF_FFFF, 0u32..=0xFF_FFFF).prop_map(|(f, offset, length)| {
            Command::ReadData {
                file: FileId::new(f),
                offset,
                length,
            }
        }),
    ]
}

proptest! {
    #[test]
    fn frame_recovers_code_cid_and_payload(
        cmd in sample_commands(),
        pcb in prop::sample::select(vec![0x0Au8, 0x0B]),
        cid in 0u8..=14,
    ) {
        let mut frame = encode_command_frame(pcb, cid, &cmd).unwrap();
        frame.extend_from_slice(&crc_a(&frame));

        let parsed = decode_command_frame(&frame).unwrap();
        let body = cmd.encode().unwrap();
        prop_assert_eq!(parsed.pcb, pcb);
        prop_assert_eq!(parsed.cid, cid);
        prop_assert_eq!(parsed.command, cmd.command_code());
        prop_assert_eq!(&parsed.payload[..], &body[1..]);

        // deterministic for the same state and inputs
        let again = encode_command_frame(pcb, cid, &cmd).unwrap();
        prop_assert_eq!(&frame[..frame.len() - 2], &again[..]);
    }
}

#[test]
fn response_envelope_follows_pcb() {
    // CID present
    let r = Frame::decode_response(&hex::decode("0b00af0102").unwrap(), 0x0B).unwrap();
    assert_eq!(r.status, StatusCode::AdditionalFrame);
    assert_eq!(r.data, vec![0x01, 0x02]);
    // CID absent
    let r = Frame::decode_response(&hex::decode("02f0").unwrap(), 0x0A).unwrap();
    assert_eq!(r.status, StatusCode::FileNotFound);
    assert!(r.data.is_empty());
}
