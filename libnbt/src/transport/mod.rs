// libnbt/src/transport/mod.rs

pub mod mock;
pub mod simulated;
pub mod traits;

pub use mock::{MockTransport, SentLog};
pub use simulated::SimulatedTag;
pub use traits::Transport;
