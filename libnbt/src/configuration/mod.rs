// libnbt/src/configuration/mod.rs

//! Desired tag state: per-file access policies plus the tag-wide interface
//! and GPIO settings. A [`Configuration`] describes an end state, not a
//! delta; [`crate::operations::configure`] works out what must change.

pub mod builder;
pub mod presets;

pub use builder::ConfigurationBuilder;

use crate::types::{CommunicationInterface, FileAccessPolicy, FileId, GpioFunction};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Configuration {
    pub policies: Vec<FileAccessPolicy>,
    pub communication_interface: CommunicationInterface,
    pub irq_function: GpioFunction,
}

impl Configuration {
    /// Build a validated configuration.
    pub fn new(
        policies: Vec<FileAccessPolicy>,
        communication_interface: CommunicationInterface,
        irq_function: GpioFunction,
    ) -> Result<Self> {
        let config = Self {
            policies,
            communication_interface,
            irq_function,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Check that no file appears twice in the policy set and that every
    /// password id fits the record encoding.
    pub fn validate(&self) -> Result<()> {
        validate_policies(&self.policies)
    }

    /// Desired policy for `file_id`, if the configuration names one.
    pub fn policy(&self, file_id: FileId) -> Option<&FileAccessPolicy> {
        self.policies.iter().find(|p| p.file_id == file_id)
    }
}

/// Reject policy sets that name a file more than once or carry an
/// unencodable password id.
pub(crate) fn validate_policies(policies: &[FileAccessPolicy]) -> Result<()> {
    for (i, policy) in policies.iter().enumerate() {
        if policies[..i].iter().any(|p| p.file_id == policy.file_id) {
            return Err(Error::DuplicatePolicy {
                file_id: policy.file_id,
            });
        }
        policy.validate()?;
    }
    Ok(())
}
