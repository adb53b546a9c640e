// libnbt/src/constants.rs
//! Wire-level constants shared by the command builders, the operations and
//! the simulated tag.

/// Default I2C slave address of the tag.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x18;

/// Default receive timeout for a single exchange, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Status word signalling success. Every other value is a protocol failure.
pub const SW_SUCCESS: u16 = 0x9000;

/// Maximum number of bytes moved by one read/update-binary exchange
/// (the command carries a 1-byte length field).
pub const MAX_CHUNK_LEN: usize = 0xFF;

/// Size of the addressable offset space within a file (12-bit offsets).
pub const FILE_SIZE_LIMIT: usize = 4096;

/// Number of file access policy records the tag reports.
pub const FAP_RECORD_COUNT: usize = 7;

/// Encoded size of a single file access policy record:
/// file id (2) + I2C read + I2C write + NFC read + NFC write.
pub const FAP_RECORD_LEN: usize = 6;

/// Size of the big-endian length prefix used by pass-through blobs and the
/// NDEF file.
pub const LENGTH_PREFIX_LEN: usize = 2;

/// Interindustry class byte.
pub const CLA_ISO: u8 = 0x00;
/// Proprietary class byte used by the tag-specific commands.
pub const CLA_PROPRIETARY: u8 = 0x80;

pub const INS_SELECT: u8 = 0xA4;
pub const INS_READ_BINARY: u8 = 0xB0;
pub const INS_UPDATE_BINARY: u8 = 0xD6;
pub const INS_GET_DATA: u8 = 0xCA;
pub const INS_PUT_DATA: u8 = 0xDA;
pub const INS_SET_CONFIGURATION: u8 = 0xE2;
pub const INS_PASS_THROUGH_FETCH_DATA: u8 = 0xEA;
pub const INS_PASS_THROUGH_PUT_RESPONSE: u8 = 0xEB;

/// SELECT P1: select by DF name (application identifier).
pub const P1_SELECT_BY_NAME: u8 = 0x04;
/// SELECT P1: select by file identifier.
pub const P1_SELECT_BY_FILE_ID: u8 = 0x00;
/// SELECT P2: no response data requested.
pub const P2_SELECT_NO_RESPONSE: u8 = 0x0C;

/// Operational application identifier.
pub const NBT_APPLICATION_AID: [u8; 7] = [0xD2, 0x76, 0x00, 0x00, 0x04, 0x15, 0x02];

/// Configurator application identifier.
pub const CONFIGURATOR_APPLICATION_AID: [u8; 13] = [
    0xD2, 0x76, 0x00, 0x00, 0x04, 0x15, 0x02, 0x00, 0x00, 0x0B, 0x00, 0x01, 0x01,
];

/// Encoded access conditions.
pub const ACCESS_ALWAYS: u8 = 0x00;
pub const ACCESS_NEVER: u8 = 0xFF;
pub const ACCESS_PASSWORD_BASE: u8 = 0x40;
pub const ACCESS_PASSWORD_ID_MASK: u8 = 0x1F;

/// Status words produced by the tag (and by the simulated tag).
pub const SW_WRONG_LENGTH: u16 = 0x6700;
pub const SW_SECURITY_STATUS_NOT_SATISFIED: u16 = 0x6982;
pub const SW_CONDITIONS_NOT_SATISFIED: u16 = 0x6985;
pub const SW_COMMAND_NOT_ALLOWED: u16 = 0x6986;
pub const SW_WRONG_DATA: u16 = 0x6A80;
pub const SW_FILE_NOT_FOUND: u16 = 0x6A82;
pub const SW_REFERENCED_DATA_NOT_FOUND: u16 = 0x6A88;
pub const SW_WRONG_P1P2: u16 = 0x6B00;
pub const SW_INS_NOT_SUPPORTED: u16 = 0x6D00;
pub const SW_CLA_NOT_SUPPORTED: u16 = 0x6E00;
