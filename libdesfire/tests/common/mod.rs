// Shared helpers for the integration tests. Each topic file pulls this in
// with `#[path = "../common/mod.rs"]`, so not every helper is used
// everywhere.
#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
