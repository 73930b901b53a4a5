//! Utilities for libdesfire: small, reusable helpers used across the crate.
//!
//! Currently only hex formatting/parsing, used for frame tracing, AID
//! display and the diagnostic dumps.

pub mod hex;

pub use hex::*;
