// libnbt/src/protocol/mod.rs

pub mod apdu;
pub mod blob;
pub mod codec;
pub mod commands;
pub mod parser;
pub mod responses;

pub use apdu::Apdu;
pub use blob::Blob;
pub use commands::Command;
pub use responses::{decode_pass_through_apdu, decode_policies, Response};
