// libdesfire/src/error.rs

use thiserror::Error;

use crate::status::{Status, StatusCode, TransportError};

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("card status {status} for command {command:#04x}")]
    Application { command: u8, status: StatusCode },

    #[error("unknown file type {0:#04x}")]
    UnknownFileType(u8),

    #[error("application id payload of {len} bytes is not a multiple of 3")]
    MisalignedApplicationIds { len: usize },

    #[error("no room: capacity {capacity} bytes, required {required}")]
    NoRoom { capacity: usize, required: usize },

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("{name} out of range: {value:#x} exceeds {max:#x}")]
    ValueOutOfRange {
        name: &'static str,
        value: u32,
        max: u32,
    },

    #[error("invalid card identifier {0}: must be 0..=14")]
    InvalidCid(u8),

    #[error("no response decoder for command {0:#04x}")]
    UnsupportedCommand(u8),

    #[error("unexpected response to command {0:#04x}")]
    UnexpectedResponse(u8),

    #[error("device not found")]
    DeviceNotFound,
}

/// Which layer an [`Error`] originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorTier {
    /// Link/frame level, reported by the transport or the block envelope.
    Transport,
    /// DESFire status byte other than OPERATION_OK.
    Application,
    /// Local decode or integrity check on a well-formed answer.
    Decode,
    /// Invalid input supplied by the caller.
    Argument,
}

impl Error {
    pub fn tier(&self) -> ErrorTier {
        match self {
            Self::Transport(_) => ErrorTier::Transport,
            Self::Application { .. } => ErrorTier::Application,
            Self::UnknownFileType(_)
            | Self::MisalignedApplicationIds { .. }
            | Self::NoRoom { .. }
            | Self::InvalidLength { .. }
            | Self::UnexpectedResponse(_) => ErrorTier::Decode,
            Self::ValueOutOfRange { .. }
            | Self::InvalidCid(_)
            | Self::UnsupportedCommand(_)
            | Self::DeviceNotFound => ErrorTier::Argument,
        }
    }

    /// Dual status view of transport and application failures.
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Transport(e) => Some(Status::Transport(e.clone())),
            Self::Application { status, .. } => Some(Status::Application(*status)),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
