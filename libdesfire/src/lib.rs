// libdesfire/src/lib.rs

//! libdesfire
//!
//! MIFARE DESFire command layer on top of an ISO/IEC 14443-4 transport.
//! The reader chip is abstracted behind [`transport::Transport`]; this
//! crate builds the I-blocks, drives ADDITIONAL_FRAME chaining and decodes
//! the card's answers.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
#[cfg(feature = "diagnostics")]
pub mod dump;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod status;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// the status model and the newtypes in `types` are available for
// consumers and for convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::status::*;
pub use crate::types::*;

pub use prelude::*;
