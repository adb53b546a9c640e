// libnbt/src/protocol/commands/pass_through.rs

use crate::constants::{CLA_PROPRIETARY, INS_PASS_THROUGH_FETCH_DATA, INS_PASS_THROUGH_PUT_RESPONSE};
use crate::protocol::{Apdu, Blob, Response};
use crate::Result;

/// Encode the fetch of data received over the pass-through channel.
pub fn encode_fetch_data() -> Apdu {
    Apdu::new(CLA_PROPRIETARY, INS_PASS_THROUGH_FETCH_DATA, 0x00, 0x00).with_le(256)
}

/// Encode the forwarding of `response` back through the pass-through
/// channel. The encoded response travels as a length-delimited blob.
pub fn encode_put_response(response: &Response) -> Result<Apdu> {
    let payload = Blob::encode(&response.encode())?;
    Ok(Apdu::new(CLA_PROPRIETARY, INS_PASS_THROUGH_PUT_RESPONSE, 0x00, 0x00).with_data(payload))
}
