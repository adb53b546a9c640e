// libnbt/src/operations/file.rs

use log::{debug, error};

use crate::constants::{FILE_SIZE_LIMIT, MAX_CHUNK_LEN};
use crate::operations::select::select_file;
use crate::protocol::Command;
use crate::tag::{Active, Tag};
use crate::types::FileId;
use crate::{Error, Result};

/// Reject ranges reaching past the addressable file space.
fn check_range(offset: u16, length: usize) -> Result<()> {
    if offset as usize + length > FILE_SIZE_LIMIT {
        error!(
            "range {}+{} exceeds file size limit {}",
            offset, length, FILE_SIZE_LIMIT
        );
        return Err(Error::OutOfRange {
            offset,
            length,
            limit: FILE_SIZE_LIMIT,
        });
    }
    Ok(())
}

/// On-tag address of the chunk starting `chunk_offset` bytes into the range.
/// `check_range` keeps the sum below the file size limit.
fn chunk_address(offset: u16, chunk_offset: usize) -> u16 {
    offset + chunk_offset as u16
}

/// Read `buf.len()` bytes of `file_id` starting at `offset`.
///
/// The range is read in chunks of at most 255 bytes. A failing chunk aborts
/// the read; `buf` then holds the chunks read before it.
pub fn read_file(tag: &mut Tag<Active>, file_id: FileId, offset: u16, buf: &mut [u8]) -> Result<()> {
    check_range(offset, buf.len())?;
    select_file(tag, file_id)?;
    read_chunks(tag, file_id, offset, buf)
}

/// Read `length` bytes of `file_id` starting at `offset` into a new buffer.
pub fn read_file_to_vec(
    tag: &mut Tag<Active>,
    file_id: FileId,
    offset: u16,
    length: usize,
) -> Result<Vec<u8>> {
    check_range(offset, length)?;
    let mut buf = vec![0u8; length];
    read_file(tag, file_id, offset, &mut buf)?;
    Ok(buf)
}

/// Chunked read from the currently selected file.
pub(crate) fn read_chunks(
    tag: &mut Tag<Active>,
    file_id: FileId,
    offset: u16,
    buf: &mut [u8],
) -> Result<()> {
    check_range(offset, buf.len())?;
    debug!("reading {} bytes from {} at offset {}", buf.len(), file_id, offset);

    for (index, chunk) in buf.chunks_mut(MAX_CHUNK_LEN).enumerate() {
        let address = chunk_address(offset, index * MAX_CHUNK_LEN);
        let guard = tag.exchange(&Command::ReadBinary {
            offset: address,
            length: chunk.len() as u8,
        })?;

        let data = guard.data();
        if data.len() != chunk.len() {
            error!(
                "short read from {} at offset {}: expected {} bytes, got {}",
                file_id,
                address,
                chunk.len(),
                data.len()
            );
            return Err(Error::ShortRead {
                file_id,
                expected: chunk.len(),
                actual: data.len(),
            });
        }
        chunk.copy_from_slice(data);
    }
    Ok(())
}

/// Write `data` to `file_id` starting at `offset`.
///
/// The data is written in chunks of at most 255 bytes. A failing chunk
/// aborts the write; chunks written before it are not rolled back.
pub fn write_file(tag: &mut Tag<Active>, file_id: FileId, offset: u16, data: &[u8]) -> Result<()> {
    check_range(offset, data.len())?;
    select_file(tag, file_id)?;
    write_chunks(tag, file_id, offset, data)
}

fn write_chunks(tag: &mut Tag<Active>, file_id: FileId, offset: u16, data: &[u8]) -> Result<()> {
    debug!("writing {} bytes to {} at offset {}", data.len(), file_id, offset);

    for (index, chunk) in data.chunks(MAX_CHUNK_LEN).enumerate() {
        tag.exchange(&Command::UpdateBinary {
            offset: chunk_address(offset, index * MAX_CHUNK_LEN),
            data: chunk.to_vec(),
        })?;
    }
    Ok(())
}
