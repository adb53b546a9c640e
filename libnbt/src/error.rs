// libnbt/src/error.rs

use thiserror::Error;

use crate::types::{FileId, Operation, StatusWord};

/// Coarse classification of an [`Error`], used by callers that only care
/// about which layer failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A precondition was violated before any exchange was attempted.
    Argument,
    /// The underlying exchange could not complete.
    Transport,
    /// The exchange completed but the status word was not 0x9000.
    ProtocolStatus,
    /// The status word was fine but the returned data does not match the request.
    DataIntegrity,
    /// A pass-through blob or an APDU could not be decoded.
    Decode,
}

/// Common error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("offset {offset} + length {length} exceeds file size limit {limit}")]
    OutOfRange {
        offset: u16,
        length: usize,
        limit: usize,
    },

    #[error("unknown file identifier {0:#06x}")]
    UnknownFileId(u16),

    #[error("tag reports no access policy for file {file_id}")]
    PolicyNotFound { file_id: FileId },

    #[error("duplicate access policy for file {file_id}")]
    DuplicatePolicy { file_id: FileId },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("operation timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("{operation} failed: status word {sw}")]
    Status {
        operation: Operation,
        sw: StatusWord,
    },

    #[error("short read from file {file_id}: expected {expected} bytes, got {actual}")]
    ShortRead {
        file_id: FileId,
        expected: usize,
        actual: usize,
    },

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid access policy record: {0}")]
    InvalidRecord(String),

    #[error("malformed pass-through payload: {0}")]
    MalformedBlob(String),

    #[error("malformed APDU: {0}")]
    MalformedApdu(String),
}

impl Error {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. }
            | Self::UnknownFileId(_)
            | Self::DuplicatePolicy { .. }
            | Self::InvalidArgument(_) => ErrorKind::Argument,
            Self::Timeout | Self::Transport(_) => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::ProtocolStatus,
            Self::ShortRead { .. }
            | Self::InvalidLength { .. }
            | Self::InvalidRecord(_)
            | Self::PolicyNotFound { .. } => ErrorKind::DataIntegrity,
            Self::MalformedBlob(_) | Self::MalformedApdu(_) => ErrorKind::Decode,
        }
    }

    /// Status word observed by a failed exchange, if this is a protocol error.
    pub fn status_word(&self) -> Option<StatusWord> {
        match self {
            Self::Status { sw, .. } => Some(*sw),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
