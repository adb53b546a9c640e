// libnbt/src/configuration/builder.rs

use crate::configuration::Configuration;
use crate::types::{CommunicationInterface, FileAccessPolicy, GpioFunction};
use crate::{Error, Result};

/// Builder for [`Configuration`]. Both tag-wide settings are required.
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    policies: Vec<FileAccessPolicy>,
    communication_interface: Option<CommunicationInterface>,
    irq_function: Option<GpioFunction>,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: FileAccessPolicy) -> Self {
        self.policies.push(policy);
        self
    }

    pub fn policies(mut self, policies: impl IntoIterator<Item = FileAccessPolicy>) -> Self {
        self.policies.extend(policies);
        self
    }

    pub fn communication_interface(mut self, interface: CommunicationInterface) -> Self {
        self.communication_interface = Some(interface);
        self
    }

    pub fn irq_function(mut self, function: GpioFunction) -> Self {
        self.irq_function = Some(function);
        self
    }

    pub fn build(self) -> Result<Configuration> {
        let communication_interface = self.communication_interface.ok_or_else(|| {
            Error::InvalidArgument("communication interface not configured".into())
        })?;
        let irq_function = self
            .irq_function
            .ok_or_else(|| Error::InvalidArgument("GPIO function not configured".into()))?;
        Configuration::new(self.policies, communication_interface, irq_function)
    }
}
