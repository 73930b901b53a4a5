// libdesfire/src/tag/operations/mod.rs

pub mod application;
pub mod data;
pub mod file;
pub mod key;
pub mod version;

// Re-export the operations at the operations root so callers can use
// `crate::tag::operations::read_data(...)`.
pub use application::{get_application_ids, select_application};
pub use data::{get_value, read_data, read_data_into};
pub use file::{get_file_ids, get_file_settings};
pub use key::{get_key_settings, get_key_version};
pub use version::get_version;
