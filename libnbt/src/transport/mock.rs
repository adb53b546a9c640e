// libnbt/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crate::protocol::Response;
use crate::transport::traits::Transport;
use crate::types::StatusWord;
use crate::{Error, Result};

/// Log of every payload sent through a [`MockTransport`]. Cloned out
/// before the transport is boxed so tests can inspect traffic afterwards.
pub type SentLog = Arc<Mutex<Vec<Vec<u8>>>>;

/// Mock transport for unit tests. It records sent payloads and returns queued responses.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub responses: VecDeque<Vec<u8>>,
    /// Bytes reported by `activate`.
    pub activation_response: Vec<u8>,
    /// Testing hook: number of receive calls that should fail with Timeout
    pub receive_failures: usize,
    pub resets: usize,
    sent: SentLog,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activation_response(mut self, atpo: Vec<u8>) -> Self {
        self.activation_response = atpo;
        self
    }

    /// Set how many subsequent receive calls should fail (for tests).
    pub fn set_receive_failures(&mut self, n: usize) {
        self.receive_failures = n;
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    /// Queue `data || 90 00`.
    pub fn push_ok(&mut self, data: &[u8]) {
        self.push_response(Response::success(data).encode());
    }

    /// Queue a data-less response carrying `sw`.
    pub fn push_status(&mut self, sw: u16) {
        self.push_response(StatusWord::new(sw).to_bytes().to_vec());
    }

    /// Shared handle to the sent log.
    pub fn sent_log(&self) -> SentLog {
        Arc::clone(&self.sent)
    }

    /// Snapshot of every payload sent so far.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, _timeout_ms: u64) -> Result<Vec<u8>> {
        if self.receive_failures > 0 {
            self.receive_failures -= 1;
            return Err(Error::Timeout);
        }
        self.responses.pop_front().ok_or(Error::Timeout)
    }

    fn reset(&mut self) -> Result<()> {
        // Queued responses survive a reset so tests can seed replies
        // before handing the transport to a Tag.
        self.resets += 1;
        Ok(())
    }

    fn activate(&mut self) -> Result<Vec<u8>> {
        self.reset()?;
        Ok(self.activation_response.clone())
    }
}
