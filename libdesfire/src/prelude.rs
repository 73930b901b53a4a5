// libdesfire/src/prelude.rs

pub use crate::device::{ActivationConfig, BitRates, Device, DeviceBuilder};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::responses::{
    Ats, FileKind, FileSettings, KeySettings, ProductionInfo, RecordSettings, VersionBlock,
    VersionInfo,
};
pub use crate::protocol::{Command, Response};
pub use crate::tag::Tag;
pub use crate::transport::{MockTransport, Transport};
pub use crate::{
    AccessRights, Aid, CommunicationMode, Error, ErrorTier, FileId, FileType, Result, Status,
    StatusCode, TransportError,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
