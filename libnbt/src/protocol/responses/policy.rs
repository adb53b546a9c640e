// libnbt/src/protocol/responses/policy.rs

use crate::constants::{FAP_RECORD_COUNT, FAP_RECORD_LEN};
use crate::types::FileAccessPolicy;
use crate::{Error, Result};

/// Decode the data field of a policy read.
/// Layout: FAP_RECORD_COUNT consecutive records of FAP_RECORD_LEN bytes each,
/// in no guaranteed order. Each file appears exactly once.
pub fn decode_policies(data: &[u8]) -> Result<[FileAccessPolicy; FAP_RECORD_COUNT]> {
    const EXPECTED_LEN: usize = FAP_RECORD_COUNT * FAP_RECORD_LEN;
    if data.len() != EXPECTED_LEN {
        return Err(Error::InvalidLength {
            expected: EXPECTED_LEN,
            actual: data.len(),
        });
    }

    let records = data
        .chunks_exact(FAP_RECORD_LEN)
        .map(FileAccessPolicy::decode)
        .collect::<Result<Vec<_>>>()?;

    for (i, record) in records.iter().enumerate() {
        if records[..i].iter().any(|r| r.file_id == record.file_id) {
            return Err(Error::InvalidRecord(format!(
                "duplicate record for file {}",
                record.file_id
            )));
        }
    }

    records.try_into().map_err(|v: Vec<FileAccessPolicy>| Error::InvalidLength {
        expected: FAP_RECORD_COUNT,
        actual: v.len(),
    })
}
