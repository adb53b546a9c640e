// libnbt/src/protocol/blob.rs

use crate::constants::LENGTH_PREFIX_LEN;
use crate::protocol::parser;
use crate::{Error, Result};

/// Length-delimited blob used by the pass-through channel.
/// Format: [Length(2, BE)] [Payload(Length)]
pub struct Blob;

impl Blob {
    /// Encode a payload with its 2-byte length prefix.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        let len = u16::try_from(payload.len()).map_err(|_| Error::InvalidLength {
            expected: u16::MAX as usize,
            actual: payload.len(),
        })?;
        let mut out = Vec::with_capacity(LENGTH_PREFIX_LEN + payload.len());
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(payload);
        Ok(out)
    }

    /// Decode a blob and return its payload. Empty, truncated and over-long
    /// blobs are rejected.
    pub fn decode(bytes: &[u8]) -> Result<Vec<u8>> {
        let declared = parser::be_u16_at(bytes, 0).map_err(|_| {
            Error::MalformedBlob(format!("missing length prefix ({} bytes)", bytes.len()))
        })? as usize;

        let payload = &bytes[LENGTH_PREFIX_LEN..];
        if declared == 0 {
            return Err(Error::MalformedBlob("empty payload".into()));
        }
        if payload.len() < declared {
            return Err(Error::MalformedBlob(format!(
                "truncated payload: declared {} bytes, got {}",
                declared,
                payload.len()
            )));
        }
        if payload.len() > declared {
            return Err(Error::MalformedBlob(format!(
                "{} trailing bytes after declared payload",
                payload.len() - declared
            )));
        }
        Ok(payload.to_vec())
    }
}
