// libnbt/src/protocol/responses/pass_through.rs

use crate::protocol::{Apdu, Blob};
use crate::Result;

/// Decode the data field of a pass-through fetch: a length-delimited blob
/// wrapping the APDU an external host sent through the tag.
pub fn decode_pass_through_apdu(data: &[u8]) -> Result<Apdu> {
    let blob = Blob::decode(data)?;
    Apdu::decode(&blob)
}
