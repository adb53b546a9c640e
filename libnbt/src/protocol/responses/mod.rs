// libnbt/src/protocol/responses/mod.rs

pub mod pass_through;
pub mod policy;

pub use pass_through::decode_pass_through_apdu;
pub use policy::decode_policies;

use crate::protocol::parser;
use crate::types::StatusWord;
use crate::Result;

/// Response APDU: optional data field followed by the status word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Data field, possibly empty.
    pub data: Vec<u8>,
    /// Trailing status word.
    pub sw: StatusWord,
}

impl Response {
    pub fn new(data: impl Into<Vec<u8>>, sw: StatusWord) -> Self {
        Self {
            data: data.into(),
            sw,
        }
    }

    /// Successful response carrying `data`.
    pub fn success(data: impl Into<Vec<u8>>) -> Self {
        Self::new(data, StatusWord::SUCCESS)
    }

    /// Data-less response carrying only a status word.
    pub fn status(sw: u16) -> Self {
        Self::new(Vec::new(), StatusWord::new(sw))
    }

    /// Decode raw response bytes (`data || SW1 SW2`).
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let (data, sw1, sw2) = parser::split_status_word(raw)?;
        Ok(Self::new(data, StatusWord::from_bytes(sw1, sw2)))
    }

    /// Encode as `data || SW1 SW2`.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() + 2);
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.sw.to_bytes());
        out
    }

    pub fn is_success(&self) -> bool {
        self.sw.is_success()
    }
}
