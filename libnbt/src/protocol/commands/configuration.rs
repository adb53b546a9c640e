// libnbt/src/protocol/commands/configuration.rs

use crate::constants::{CLA_PROPRIETARY, INS_SET_CONFIGURATION};
use crate::protocol::Apdu;
use crate::types::ConfigurationTag;

/// Encode SET CONFIGURATION for a single one-byte tag value.
/// Data: tag(1) + length(1, always 1) + value(1)
pub fn encode_set_configuration(tag: ConfigurationTag, value: u8) -> Apdu {
    Apdu::new(CLA_PROPRIETARY, INS_SET_CONFIGURATION, 0x00, 0x00).with_data(vec![
        tag as u8,
        0x01,
        value,
    ])
}
