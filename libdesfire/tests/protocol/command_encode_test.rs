#[path = "../common/mod.rs"]
mod common;

use libdesfire::protocol::Command;
use libdesfire::{Aid, Error, FileId};

#[test]
fn encode_wire_bytes() {
    let cases: Vec<(Command, &str)> = vec![
        (Command::GetVersion, "60"),
        (Command::AdditionalFrame, "af"),
        (
            Command::SelectApplication {
                aid: Aid::from_u32(0x00F4_8120).unwrap(),
            },
            "5a2081f4",
        ),
        (Command::GetApplicationIds, "6a"),
        (Command::GetFileIds, "6f"),
        (
            Command::GetFileSettings {
                file: FileId::new(0x0E),
            },
            "f50e",
        ),
        (Command::GetKeySettings, "45"),
        (Command::GetKeyVersion { key: 2 }, "6402"),
        (
            Command::ReadData {
                file: FileId::new(1),
                offset: 0x00_1234,
                length: 0x01_0000,
            },
            "bd01341200000001",
        ),
        (
            Command::GetValue {
                file: FileId::new(4),
            },
            "6c04",
        ),
    ];
    for (cmd, expected) in cases {
        assert_eq!(
            hex::encode(cmd.encode().unwrap()),
            expected,
            "{}",
            cmd.name()
        );
    }
}

#[test]
fn read_data_limits() {
    let at_limit = Command::ReadData {
        file: FileId::new(0),
        offset: 0xFF_FFFF,
        length: 0xFF_FFFF,
    };
    assert_eq!(
        hex::encode(at_limit.encode().unwrap()),
        "bd00ffffffffffff"
    );
    let over = Command::ReadData {
        file: FileId::new(0),
        offset: 0x100_0000,
        length: 1,
    };
    assert!(matches!(
        over.encode(),
        Err(Error::ValueOutOfRange { name: "offset", .. })
    ));
}
