// libnbt/src/protocol/commands/binary.rs

use crate::constants::{CLA_ISO, INS_READ_BINARY, INS_UPDATE_BINARY};
use crate::protocol::Apdu;

/// Offsets travel in P1/P2 with the top bit of P1 cleared.
fn offset_bytes(offset: u16) -> (u8, u8) {
    let [hi, lo] = offset.to_be_bytes();
    (hi & 0x7F, lo)
}

/// Encode READ BINARY for `length` bytes (1..=255) at `offset` in the
/// currently selected file.
pub fn encode_read_binary(offset: u16, length: u8) -> Apdu {
    let (p1, p2) = offset_bytes(offset);
    Apdu::new(CLA_ISO, INS_READ_BINARY, p1, p2).with_le(length as u16)
}

/// Encode UPDATE BINARY writing `data` at `offset` in the currently
/// selected file.
pub fn encode_update_binary(offset: u16, data: &[u8]) -> Apdu {
    let (p1, p2) = offset_bytes(offset);
    Apdu::new(CLA_ISO, INS_UPDATE_BINARY, p1, p2).with_data(data)
}
