// libdesfire/src/transport/mod.rs

pub mod mock;
pub mod traits;

pub use mock::{MockReply, MockTransport};
pub use traits::{Transport, TransportResult};
