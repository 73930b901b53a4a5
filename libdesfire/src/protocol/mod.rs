// libdesfire/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{crc_a, crc_a_matches};
pub use commands::Command;
pub use frame::Frame;
pub use responses::*;
