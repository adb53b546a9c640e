// libnbt/src/operations/pass_through.rs

use log::{debug, error};

use crate::protocol::{decode_pass_through_apdu, Apdu, Command, Response};
use crate::tag::{Active, Tag};
use crate::Result;

/// Fetch the APDU an external host relayed through the pass-through
/// channel. No application or file needs to be selected.
pub fn get_passthrough_apdu(tag: &mut Tag<Active>) -> Result<Apdu> {
    let guard = tag.exchange(&Command::PassThroughFetchData)?;
    let apdu = decode_pass_through_apdu(guard.data()).map_err(|e| {
        error!("pass-through payload rejected: {}", e);
        e
    })?;
    debug!(
        "pass-through APDU: CLA {:#04x} INS {:#04x}, {} data bytes",
        apdu.cla,
        apdu.ins,
        apdu.data.len()
    );
    Ok(apdu)
}

/// Forward `response` back through the pass-through channel.
///
/// Only the status word of the put exchange itself is checked; the status
/// word carried inside `response` is payload.
pub fn set_passthrough_response(tag: &mut Tag<Active>, response: &Response) -> Result<()> {
    debug!("forwarding pass-through response with status {}", response.sw);
    tag.exchange(&Command::PassThroughPutResponse {
        response: response.clone(),
    })?;
    Ok(())
}
