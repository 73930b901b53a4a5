#[path = "../common/mod.rs"]
mod common;

use common::*;
use libdesfire::FileId;

fn read_chained(frames: &[Vec<u8>]) -> Vec<u8> {
    let mut replies: Vec<_> = frames.iter().map(|f| more(f)).collect();
    if let Some(last) = replies.last_mut() {
        last.0 = libdesfire::StatusCode::OperationOk;
    }
    let (inner, mut device, mut tag) = scripted_card(&replies);
    let data = tag.read_data(&mut device, FileId::new(2), 0, 0).unwrap();
    assert_eq!(inner.borrow().sent_commands().len(), frames.len());
    data
}

#[test]
fn read_data_one_two_three_frames() {
    let chunks = [sample_data(59), vec![0xAB; 59], vec![0x01, 0x02, 0x03]];
    for n in 1..=3 {
        let frames = &chunks[..n];
        let data = read_chained(frames);
        let expected: Vec<u8> = frames.concat();
        assert_eq!(data.len(), frames.iter().map(Vec::len).sum::<usize>());
        assert_eq!(data, expected);
    }
}

#[test]
fn read_data_encodes_offset_and_length() {
    let (inner, mut device, mut tag) = scripted_card(&[ok(&sample_data(16))]);
    let data = tag
        .read_data(&mut device, FileId::new(3), 0x0000_01F0, 16)
        .unwrap();
    assert_eq!(data.len(), 16);
    let sent = inner.borrow().sent_commands();
    assert_eq!(hex::encode(&sent[0].payload), "03f00100100000");
}

#[test]
fn get_value_signed() {
    let (_inner, mut device, mut tag) = scripted_card(&[ok(&(-42i32).to_le_bytes())]);
    assert_eq!(tag.get_value(&mut device, FileId::new(4)).unwrap(), -42);
}
