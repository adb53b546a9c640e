// libnbt/src/tag/builder.rs

use crate::constants::DEFAULT_TIMEOUT_MS;
use crate::tag::handle::{Active, Inactive, Tag};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Tag with optional configuration.
pub struct TagBuilder {
    transport: Option<Box<dyn Transport>>,
    timeout_ms: u64,
}

impl Default for TagBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TagBuilder {
    pub fn new() -> Self {
        Self {
            transport: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Consume the builder and return an inactive Tag.
    pub fn build(self) -> Result<Tag<Inactive>> {
        let transport = self
            .transport
            .ok_or_else(|| Error::InvalidArgument("no transport configured".into()))?;
        if self.timeout_ms == 0 {
            return Err(Error::InvalidArgument("timeout must be non-zero".into()));
        }
        Ok(Tag::new_with_transport(transport).with_timeout(self.timeout_ms))
    }

    /// Build and activate in one step.
    pub fn build_active(self) -> Result<Tag<Active>> {
        self.build()?.activate()
    }
}
