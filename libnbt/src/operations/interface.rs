// libnbt/src/operations/interface.rs

use log::debug;

use crate::operations::select::select_configurator_application;
use crate::protocol::Command;
use crate::tag::{Active, Tag};
use crate::types::{CommunicationInterface, ConfigurationTag, GpioFunction};
use crate::Result;

/// Enable or disable the NFC and I2C interfaces.
pub fn set_communication_interface(
    tag: &mut Tag<Active>,
    interface: CommunicationInterface,
) -> Result<()> {
    select_configurator_application(tag)?;
    debug!("setting communication interface: {}", interface);
    set_configuration_tag(tag, ConfigurationTag::CommunicationInterface, interface as u8)
}

/// Choose what the GPIO/IRQ pin signals.
pub fn set_gpio_function(tag: &mut Tag<Active>, function: GpioFunction) -> Result<()> {
    select_configurator_application(tag)?;
    debug!("setting GPIO function: {}", function);
    set_configuration_tag(tag, ConfigurationTag::GpioFunction, function as u8)
}

/// Set one configuration tag. The configurator application must already be
/// selected.
pub(crate) fn set_configuration_tag(
    tag: &mut Tag<Active>,
    config_tag: ConfigurationTag,
    value: u8,
) -> Result<()> {
    tag.exchange(&Command::SetConfiguration {
        tag: config_tag,
        value,
    })?;
    Ok(())
}
