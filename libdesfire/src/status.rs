// libdesfire/src/status.rs

//! Dual status model: the link-level outcome reported by the transport and
//! the DESFire status byte reported by the card.

use std::fmt;

use thiserror::Error;

/// Link-level failure reported by a [`crate::transport::Transport`] or
/// detected while unwrapping an ISO14443-4 block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("timeout in communication")]
    Timeout,
    #[error("collision detected")]
    Collision,
    #[error("CRC_A does not match")]
    CrcMismatch,
    #[error("FIFO buffer overflow")]
    BufferOverflow,
    #[error("not enough room in buffer")]
    NoRoom,
    #[error("incomplete frame: {len} bytes received")]
    IncompleteFrame { len: usize },
    #[error("unexpected block: pcb={pcb:#04x}")]
    UnexpectedBlock { pcb: u8 },
    #[error("internal error in the reader: {0}")]
    Internal(String),
}

/// DESFire status byte as returned in the first byte of every answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusCode {
    OperationOk,
    NoChanges,
    OutOfEepromError,
    IllegalCommandCode,
    IntegrityError,
    NoSuchKey,
    LengthError,
    PermissionError,
    ParameterError,
    ApplicationNotFound,
    ApplIntegrityError,
    AuthenticationError,
    AdditionalFrame,
    BoundaryError,
    PiccIntegrityError,
    CommandAborted,
    PiccDisabledError,
    CountError,
    DuplicateError,
    EepromError,
    FileNotFound,
    FileIntegrityError,
    /// A byte not defined by the DESFire command set, kept verbatim.
    Unknown(u8),
}

impl StatusCode {
    pub const fn from_u8(code: u8) -> Self {
        match code {
            0x00 => Self::OperationOk,
            0x0C => Self::NoChanges,
            0x0E => Self::OutOfEepromError,
            0x1C => Self::IllegalCommandCode,
            0x1E => Self::IntegrityError,
            0x40 => Self::NoSuchKey,
            0x7E => Self::LengthError,
            0x9D => Self::PermissionError,
            0x9E => Self::ParameterError,
            0xA0 => Self::ApplicationNotFound,
            0xA1 => Self::ApplIntegrityError,
            0xAE => Self::AuthenticationError,
            0xAF => Self::AdditionalFrame,
            0xBE => Self::BoundaryError,
            0xC1 => Self::PiccIntegrityError,
            0xCA => Self::CommandAborted,
            0xCD => Self::PiccDisabledError,
            0xCE => Self::CountError,
            0xDE => Self::DuplicateError,
            0xEE => Self::EepromError,
            0xF0 => Self::FileNotFound,
            0xF1 => Self::FileIntegrityError,
            other => Self::Unknown(other),
        }
    }

    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::OperationOk => 0x00,
            Self::NoChanges => 0x0C,
            Self::OutOfEepromError => 0x0E,
            Self::IllegalCommandCode => 0x1C,
            Self::IntegrityError => 0x1E,
            Self::NoSuchKey => 0x40,
            Self::LengthError => 0x7E,
            Self::PermissionError => 0x9D,
            Self::ParameterError => 0x9E,
            Self::ApplicationNotFound => 0xA0,
            Self::ApplIntegrityError => 0xA1,
            Self::AuthenticationError => 0xAE,
            Self::AdditionalFrame => 0xAF,
            Self::BoundaryError => 0xBE,
            Self::PiccIntegrityError => 0xC1,
            Self::CommandAborted => 0xCA,
            Self::PiccDisabledError => 0xCD,
            Self::CountError => 0xCE,
            Self::DuplicateError => 0xDE,
            Self::EepromError => 0xEE,
            Self::FileNotFound => 0xF0,
            Self::FileIntegrityError => 0xF1,
            Self::Unknown(code) => *code,
        }
    }

    /// Human readable description. Unknown codes map to "Unknown error".
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OperationOk => "Successful operation.",
            Self::NoChanges => "No changes done to backup files.",
            Self::OutOfEepromError => "Insufficient NV-Mem. to complete cmd.",
            Self::IllegalCommandCode => "Command code not supported.",
            Self::IntegrityError => "CRC or MAC does not match data.",
            Self::NoSuchKey => "Invalid key number specified.",
            Self::LengthError => "Length of command string invalid.",
            Self::PermissionError => "Curr conf/status doesnt allow cmd.",
            Self::ParameterError => "Value of the parameter(s) invalid.",
            Self::ApplicationNotFound => "Requested AID not present on PICC.",
            Self::ApplIntegrityError => "Unrecoverable err within app.",
            Self::AuthenticationError => {
                "Current authentication status doesn't allow requested command."
            }
            Self::AdditionalFrame => "Additional data frame to be sent.",
            Self::BoundaryError => "Attempt to read/write beyond limits.",
            Self::PiccIntegrityError => "Unrecoverable error within PICC.",
            Self::CommandAborted => "Previous command not fully completed.",
            Self::PiccDisabledError => "PICC disabled by unrecoverable error.",
            Self::CountError => "Cant create more apps, already @ 28.",
            Self::DuplicateError => "Cant create dup. file/app.",
            Self::EepromError => "Couldnt complete NV-write operation.",
            Self::FileNotFound => "Specified file number doesnt exist.",
            Self::FileIntegrityError => "Unrecoverable error within file.",
            Self::Unknown(_) => "Unknown error",
        }
    }
}

impl From<u8> for StatusCode {
    fn from(code: u8) -> Self {
        Self::from_u8(code)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#04x})", self.name(), self.as_u8())
    }
}

/// Combined outcome of one exchange. The application status only exists
/// once the transport succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Transport(TransportError),
    Application(StatusCode),
}

impl Status {
    /// Build a status from both halves. A failed transport discards the
    /// application code, which is stale in that case.
    pub fn from_parts(
        transport: std::result::Result<(), TransportError>,
        application: StatusCode,
    ) -> Self {
        match transport {
            Ok(()) => Self::Application(application),
            Err(e) => Self::Transport(e),
        }
    }

    /// The single success predicate: transport ok and OPERATION_OK.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Application(StatusCode::OperationOk))
    }

    pub fn name(&self) -> String {
        match self {
            Self::Transport(e) => e.to_string(),
            Self::Application(code) => code.name().to_string(),
        }
    }
}

impl From<TransportError> for Status {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

impl From<StatusCode> for Status {
    fn from(code: StatusCode) -> Self {
        Self::Application(code)
    }
}
