// libnbt/src/protocol/codec.rs

use crate::Result;

use super::commands::Command;
use super::responses::Response;

/// Encode a Command into the wire bytes handed to the transport.
pub fn encode_command(cmd: &Command) -> Result<Vec<u8>> {
    cmd.encode()
}

/// Decode raw transport bytes into a response. The status word is kept
/// as-is; callers decide whether it signals success.
pub fn decode_response(raw: &[u8]) -> Result<Response> {
    Response::decode(raw)
}
