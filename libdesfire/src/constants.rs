// libdesfire/src/constants.rs
//! Common protocol constants used across the crate

/// ISO14443-4 Request for Answer To Select command byte
pub const RATS: u8 = 0xE0;

/// Default RATS parameter byte: FSDI 5 (64 bytes), CID 0
pub const RATS_DEFAULT_PARAM: u8 = 0x50;

/// Protocol and Parameter Selection start byte, low nibble carries the CID
pub const PPS_START: u8 = 0xD0;

/// PPS0 value announcing that PPS1 follows
pub const PPS0_PPS1_PRESENT: u8 = 0x11;

/// I-block PCB values with the CID bit set, block number 0 and 1
pub const PCB_BLOCK_0: u8 = 0x0A;
pub const PCB_BLOCK_1: u8 = 0x0B;

/// PCB bits
pub const PCB_BLOCK_NUMBER: u8 = 0x01;
pub const PCB_NAD_FOLLOWING: u8 = 0x04;
pub const PCB_CID_FOLLOWING: u8 = 0x08;
pub const PCB_CHAINING: u8 = 0x10;
/// Mask/value pair identifying an I-block (bits 7..6 = 00, bit 1 = 1)
pub const PCB_I_BLOCK_MASK: u8 = 0xC2;
pub const PCB_I_BLOCK: u8 = 0x02;

/// Highest CID usable by a PCD (15 is RFU)
pub const MAX_CID: u8 = 14;

/// Length of the CRC_A appended to each frame
pub const CRC_LEN: usize = 2;

/// DESFire command codes
pub const CMD_GET_VERSION: u8 = 0x60;
pub const CMD_ADDITIONAL_FRAME: u8 = 0xAF;
pub const CMD_SELECT_APPLICATION: u8 = 0x5A;
pub const CMD_GET_APPLICATION_IDS: u8 = 0x6A;
pub const CMD_GET_FILE_IDS: u8 = 0x6F;
pub const CMD_GET_FILE_SETTINGS: u8 = 0xF5;
pub const CMD_GET_KEY_SETTINGS: u8 = 0x45;
pub const CMD_GET_KEY_VERSION: u8 = 0x64;
pub const CMD_READ_DATA: u8 = 0xBD;
pub const CMD_GET_VALUE: u8 = 0x6C;

/// DESFire logical structure limits
pub const MAX_APPLICATION_COUNT: usize = 28;
pub const MAX_FILE_COUNT: usize = 16;
pub const AID_LEN: usize = 3;
pub const UID_LEN: usize = 7;
pub const BATCH_NUMBER_LEN: usize = 5;

/// Byte capacity of a GetApplicationIds answer (28 AIDs of 3 bytes)
pub const MAX_APPLICATION_IDS_LEN: usize = MAX_APPLICATION_COUNT * AID_LEN;

/// ReadData offset and length are 3-byte quantities
pub const MAX_DATA_LEN: u32 = 0x00FF_FFFF;

/// GetVersion part sizes: hardware and software blocks, then UID/batch/date
pub const VERSION_BLOCK_LEN: usize = 7;
pub const VERSION_PRODUCTION_LEN: usize = 14;
