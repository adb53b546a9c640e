// libnbt/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the frame-layer channel away from the APDU
/// logic. Implementations carry whole APDUs; chunking and retransmission
/// below that level are their own business.
pub trait Transport: Send {
    /// Send one raw command APDU.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive one raw response APDU with a timeout in milliseconds.
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Perform a transport-level reset.
    fn reset(&mut self) -> Result<()>;

    /// Open the channel and return the activation bytes reported by the
    /// tag (ATPO). Default implementation resets and reports nothing.
    fn activate(&mut self) -> Result<Vec<u8>> {
        self.reset()?;
        Ok(Vec::new())
    }

    /// One request/response round trip.
    fn transceive(&mut self, request: &[u8], timeout_ms: u64) -> Result<Vec<u8>> {
        self.send(request)?;
        self.receive(timeout_ms)
    }
}
