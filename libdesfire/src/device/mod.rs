// libdesfire/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::{ActivationConfig, BitRates};
pub use handle::{Device, Exchange, Initialized, Uninitialized};
