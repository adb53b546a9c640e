// libnbt/src/lib.rs

//! libnbt
//!
//! File access policy reconciliation and chunked file I/O for NBT tags
//! over an APDU command/response channel.
#![warn(missing_docs)]

pub mod configuration;
pub mod constants;
pub mod error;
pub mod operations;
pub mod prelude;
pub mod protocol;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the value types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
