// libnbt/src/protocol/commands/mod.rs

pub mod binary;
pub mod configuration;
pub mod pass_through;
pub mod policy;
pub mod select;

pub use binary::{encode_read_binary, encode_update_binary};
pub use configuration::encode_set_configuration;
pub use pass_through::{encode_fetch_data, encode_put_response};
pub use policy::{encode_get_policies, encode_update_policy};
pub use select::{encode_select_application, encode_select_file};

use crate::protocol::{Apdu, Response};
use crate::types::{Application, ConfigurationTag, FileAccessPolicy, FileId, Operation};
use crate::Result;

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    SelectApplication {
        application: Application,
    },
    SelectFile {
        file_id: FileId,
    },
    ReadBinary {
        offset: u16,
        length: u8,
    },
    UpdateBinary {
        offset: u16,
        data: Vec<u8>,
    },
    GetFileAccessPolicies,
    UpdateFileAccessPolicy {
        policy: FileAccessPolicy,
    },
    SetConfiguration {
        tag: ConfigurationTag,
        value: u8,
    },
    PassThroughFetchData,
    PassThroughPutResponse {
        response: Response,
    },
}

impl Command {
    /// Operation reported in errors raised by this command's exchange.
    pub fn operation(&self) -> Operation {
        match self {
            Self::SelectApplication { .. } => Operation::SelectApplication,
            Self::SelectFile { .. } => Operation::SelectFile,
            Self::ReadBinary { .. } => Operation::ReadBinary,
            Self::UpdateBinary { .. } => Operation::UpdateBinary,
            Self::GetFileAccessPolicies => Operation::ReadPolicies,
            Self::UpdateFileAccessPolicy { .. } => Operation::UpdatePolicy,
            Self::SetConfiguration { .. } => Operation::SetConfiguration,
            Self::PassThroughFetchData => Operation::PassThroughFetch,
            Self::PassThroughPutResponse { .. } => Operation::PassThroughPut,
        }
    }

    /// Build the command APDU.
    pub fn to_apdu(&self) -> Result<Apdu> {
        let apdu = match self {
            Self::SelectApplication { application } => encode_select_application(*application),
            Self::SelectFile { file_id } => encode_select_file(*file_id),
            Self::ReadBinary { offset, length } => encode_read_binary(*offset, *length),
            Self::UpdateBinary { offset, data } => encode_update_binary(*offset, data),
            Self::GetFileAccessPolicies => encode_get_policies(),
            Self::UpdateFileAccessPolicy { policy } => encode_update_policy(policy),
            Self::SetConfiguration { tag, value } => encode_set_configuration(*tag, *value),
            Self::PassThroughFetchData => encode_fetch_data(),
            Self::PassThroughPutResponse { response } => encode_put_response(response)?,
        };
        Ok(apdu)
    }

    /// Encode the command into wire bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.to_apdu()?.encode()
    }
}
