// libnbt/src/protocol/apdu.rs

use crate::protocol::parser;
use crate::{Error, Result};

/// Maximum command data length of a short APDU.
const MAX_SHORT_LC: usize = 255;
/// Maximum expected length of a short APDU (encoded as 0x00).
const MAX_SHORT_LE: u16 = 256;

/// Short (ISO 7816-4) command APDU.
///
/// Layout: `CLA INS P1 P2 [Lc data] [Le]`, where an Le byte of `0x00`
/// requests up to 256 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apdu {
    /// Class byte.
    pub cla: u8,
    /// Instruction byte.
    pub ins: u8,
    /// First parameter byte.
    pub p1: u8,
    /// Second parameter byte.
    pub p2: u8,
    /// Command data field, at most 255 bytes.
    pub data: Vec<u8>,
    /// Expected response length (1..=256), if any.
    pub le: Option<u16>,
}

impl Apdu {
    /// Header-only APDU (case 1).
    pub fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: Vec::new(),
            le: None,
        }
    }

    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Set the expected response length.
    pub fn with_le(mut self, le: u16) -> Self {
        self.le = Some(le);
        self
    }

    /// P1/P2 read as one big-endian value (offsets, file ids).
    pub fn p1p2(&self) -> u16 {
        u16::from_be_bytes([self.p1, self.p2])
    }

    /// Encode into wire bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.data.len() > MAX_SHORT_LC {
            return Err(Error::InvalidLength {
                expected: MAX_SHORT_LC,
                actual: self.data.len(),
            });
        }

        let mut out = Vec::with_capacity(4 + 1 + self.data.len() + 1);
        out.extend_from_slice(&[self.cla, self.ins, self.p1, self.p2]);
        if !self.data.is_empty() {
            out.push(self.data.len() as u8);
            out.extend_from_slice(&self.data);
        }
        if let Some(le) = self.le {
            match le {
                1..=255 => out.push(le as u8),
                MAX_SHORT_LE => out.push(0x00),
                other => {
                    return Err(Error::InvalidArgument(format!(
                        "expected length {} does not fit a short APDU",
                        other
                    )));
                }
            }
        }
        Ok(out)
    }

    /// Decode a short command APDU (cases 1 to 4).
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let header = parser::slice_at(bytes, 0, 4)
            .map_err(|_| Error::MalformedApdu(format!("header truncated ({} bytes)", bytes.len())))?;
        let mut apdu = Self::new(header[0], header[1], header[2], header[3]);

        let body = &bytes[4..];
        match body.len() {
            // case 1
            0 => {}
            // case 2
            1 => apdu.le = Some(decode_le(body[0])),
            _ => {
                let lc = body[0] as usize;
                if lc == 0 {
                    return Err(Error::MalformedApdu(
                        "extended length APDUs are not supported".into(),
                    ));
                }
                let rest = &body[1..];
                if rest.len() == lc {
                    // case 3
                    apdu.data = rest.to_vec();
                } else if rest.len() == lc + 1 {
                    // case 4
                    apdu.data = rest[..lc].to_vec();
                    apdu.le = Some(decode_le(rest[lc]));
                } else {
                    return Err(Error::MalformedApdu(format!(
                        "Lc {} does not match body length {}",
                        lc,
                        rest.len()
                    )));
                }
            }
        }
        Ok(apdu)
    }
}

fn decode_le(byte: u8) -> u16 {
    if byte == 0 { MAX_SHORT_LE } else { byte as u16 }
}
