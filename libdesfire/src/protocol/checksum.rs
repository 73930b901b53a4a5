// libdesfire/src/protocol/checksum.rs

/// Compute CRC_A (ISO/IEC 14443-3 Annex B) over `data`.
///
/// Preset 0x6363, reflected polynomial 0x8408, no final XOR. Returned low
/// byte first, the order in which it is transmitted.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let crc = data.iter().fold(0x6363u16, |crc, &b| {
        let mut ch = b ^ (crc & 0x00ff) as u8;
        ch ^= ch << 4;
        let ch = ch as u16;
        (crc >> 8) ^ (ch << 8) ^ (ch << 3) ^ (ch >> 4)
    });
    crc.to_le_bytes()
}

/// Check that the last two bytes of `frame` are the CRC_A of the rest.
pub fn crc_a_matches(frame: &[u8]) -> bool {
    if frame.len() < crate::constants::CRC_LEN {
        return false;
    }
    let (body, crc) = frame.split_at(frame.len() - crate::constants::CRC_LEN);
    crc_a(body) == [crc[0], crc[1]]
}
