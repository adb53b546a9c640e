// libnbt/src/operations/ndef.rs

use log::{debug, error};

use crate::constants::{FILE_SIZE_LIMIT, LENGTH_PREFIX_LEN};
use crate::operations::file::{read_chunks, write_file};
use crate::operations::select::select_file;
use crate::tag::{Active, Tag};
use crate::types::FileId;
use crate::{Error, Result};

/// Store an NDEF message at the start of the NDEF file, preceded by its
/// 2-byte big-endian length. The message bytes are not interpreted.
pub fn write_ndef_message(tag: &mut Tag<Active>, message: &[u8]) -> Result<()> {
    let capacity = FILE_SIZE_LIMIT - LENGTH_PREFIX_LEN;
    if message.len() > capacity {
        return Err(Error::OutOfRange {
            offset: 0,
            length: message.len() + LENGTH_PREFIX_LEN,
            limit: FILE_SIZE_LIMIT,
        });
    }

    let mut file = Vec::with_capacity(LENGTH_PREFIX_LEN + message.len());
    file.extend_from_slice(&(message.len() as u16).to_be_bytes());
    file.extend_from_slice(message);
    debug!("writing NDEF message of {} bytes", message.len());
    write_file(tag, FileId::Ndef, 0, &file)
}

/// Read the NDEF message stored by [`write_ndef_message`].
pub fn read_ndef_message(tag: &mut Tag<Active>) -> Result<Vec<u8>> {
    select_file(tag, FileId::Ndef)?;

    let mut prefix = [0u8; LENGTH_PREFIX_LEN];
    read_chunks(tag, FileId::Ndef, 0, &mut prefix)?;
    let length = u16::from_be_bytes(prefix) as usize;
    if length > FILE_SIZE_LIMIT - LENGTH_PREFIX_LEN {
        error!("NDEF length field {} exceeds file capacity", length);
        return Err(Error::InvalidLength {
            expected: FILE_SIZE_LIMIT - LENGTH_PREFIX_LEN,
            actual: length,
        });
    }

    let mut message = vec![0u8; length];
    read_chunks(tag, FileId::Ndef, LENGTH_PREFIX_LEN as u16, &mut message)?;
    Ok(message)
}
