// libnbt/src/configuration/presets.rs

use crate::configuration::Configuration;
use crate::types::{
    AccessCondition::{Always, Never},
    CommunicationInterface, FileAccessPolicy, FileId, GpioFunction,
};

/// Configuration for Wi-Fi connection handover: a read-only capability
/// container, an NDEF file the host writes over I2C and phones only read,
/// an open policy file and locked proprietary files. Both interfaces stay
/// enabled and the GPIO pin is unused.
pub fn wifi_connection_handover() -> Configuration {
    Configuration {
        policies: vec![
            FileAccessPolicy::new(FileId::CapabilityContainer, Always, Never, Always, Never),
            FileAccessPolicy::new(FileId::Ndef, Always, Always, Always, Never),
            FileAccessPolicy::open(FileId::FileAccessPolicy),
            FileAccessPolicy::locked(FileId::Proprietary1),
            FileAccessPolicy::locked(FileId::Proprietary2),
            FileAccessPolicy::locked(FileId::Proprietary3),
            FileAccessPolicy::locked(FileId::Proprietary4),
        ],
        communication_interface: CommunicationInterface::NfcEnabledI2cEnabled,
        irq_function: GpioFunction::Disabled,
    }
}
