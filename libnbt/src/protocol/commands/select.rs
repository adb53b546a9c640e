// libnbt/src/protocol/commands/select.rs

use crate::constants::{
    CLA_ISO, INS_SELECT, P1_SELECT_BY_FILE_ID, P1_SELECT_BY_NAME, P2_SELECT_NO_RESPONSE,
};
use crate::protocol::Apdu;
use crate::types::{Application, FileId};

/// Encode SELECT by application identifier.
pub fn encode_select_application(application: Application) -> Apdu {
    Apdu::new(CLA_ISO, INS_SELECT, P1_SELECT_BY_NAME, 0x00)
        .with_data(application.aid())
        .with_le(256)
}

/// Encode SELECT by file identifier.
pub fn encode_select_file(file_id: FileId) -> Apdu {
    Apdu::new(CLA_ISO, INS_SELECT, P1_SELECT_BY_FILE_ID, P2_SELECT_NO_RESPONSE)
        .with_data(file_id.to_be_bytes())
}
