// libnbt/src/tag/handle.rs

use std::marker::PhantomData;

use log::{debug, error, trace};

use crate::constants::DEFAULT_TIMEOUT_MS;
use crate::protocol::codec;
use crate::protocol::Command;
use crate::tag::exchange::ResponseGuard;
use crate::transport::Transport;
use crate::{Error, Result};

/// Type-state marker: channel not yet activated.
pub struct Inactive;
/// Type-state marker: channel activated, exchanges allowed.
pub struct Active;

/// Tag handle that enforces channel activation at compile time.
///
/// The handle owns the channel and is the only context operations run
/// against; pass it by `&mut` into every operation. It is `Send`, so it may
/// move to a worker thread, but one handle serves one caller at a time.
pub struct Tag<State = Inactive> {
    transport: Box<dyn Transport>,
    timeout_ms: u64,
    atpo: Vec<u8>,
    _state: PhantomData<State>,
}

impl Tag<Inactive> {
    /// Create a Tag from an existing Transport instance.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            atpo: Vec::new(),
            _state: PhantomData,
        }
    }

    /// Per-exchange receive timeout in milliseconds.
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Activate the channel. The activation bytes (ATPO) reported by the
    /// transport stay available on the active handle.
    pub fn activate(mut self) -> Result<Tag<Active>> {
        let atpo = self.transport.activate().map_err(|e| {
            error!("channel activation failed: {}", e);
            e
        })?;
        debug!("channel active, ATPO {} bytes", atpo.len());

        Ok(Tag {
            transport: self.transport,
            timeout_ms: self.timeout_ms,
            atpo,
            _state: PhantomData,
        })
    }
}

impl<State> Tag<State> {
    /// Receive timeout applied to every exchange.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}

impl Tag<Active> {
    /// Activation bytes reported when the channel was opened.
    pub fn atpo(&self) -> &[u8] {
        &self.atpo
    }

    /// Run one status-validated exchange.
    ///
    /// Transport failures propagate untouched. A completed exchange whose
    /// status word is not 0x9000 becomes [`Error::Status`]. On success the
    /// response is handed back in a guard that borrows the handle until it
    /// is dropped.
    pub fn exchange(&mut self, cmd: &Command) -> Result<ResponseGuard<'_>> {
        let operation = cmd.operation();
        let request = codec::encode_command(cmd)?;
        trace!("{}: sending {} bytes", operation, request.len());
        #[cfg(feature = "diagnostics")]
        trace!(">> {}", hex::encode_upper(&request));

        let raw = self
            .transport
            .transceive(&request, self.timeout_ms)
            .map_err(|e| {
                error!("{}: exchange failed: {}", operation, e);
                e
            })?;
        drop(request);

        #[cfg(feature = "diagnostics")]
        trace!("<< {}", hex::encode_upper(&raw));

        let response = codec::decode_response(&raw)?;
        if !response.is_success() {
            error!("{}: status word {}", operation, response.sw);
            return Err(Error::Status {
                operation,
                sw: response.sw,
            });
        }
        trace!("{}: received {} data bytes", operation, response.data.len());
        Ok(ResponseGuard::new(response))
    }

    /// Reset the underlying channel and return to the inactive state.
    pub fn deactivate(mut self) -> Result<Tag<Inactive>> {
        self.transport.reset()?;
        Ok(Tag {
            transport: self.transport,
            timeout_ms: self.timeout_ms,
            atpo: Vec::new(),
            _state: PhantomData,
        })
    }
}
