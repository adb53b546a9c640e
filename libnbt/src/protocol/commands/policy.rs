// libnbt/src/protocol/commands/policy.rs

use crate::constants::{CLA_PROPRIETARY, INS_GET_DATA, INS_PUT_DATA};
use crate::protocol::Apdu;
use crate::types::{FileAccessPolicy, FileId};

/// Encode the policy read: GET DATA addressed at the FAP file, returning
/// every record in one response.
pub fn encode_get_policies() -> Apdu {
    let [p1, p2] = FileId::FileAccessPolicy.to_be_bytes();
    Apdu::new(CLA_PROPRIETARY, INS_GET_DATA, p1, p2).with_le(256)
}

/// Encode the update of a single policy record.
pub fn encode_update_policy(policy: &FileAccessPolicy) -> Apdu {
    let [p1, p2] = FileId::FileAccessPolicy.to_be_bytes();
    Apdu::new(CLA_PROPRIETARY, INS_PUT_DATA, p1, p2).with_data(policy.encode())
}
