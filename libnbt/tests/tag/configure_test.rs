#[path = "../common/mod.rs"]
mod common;

use libnbt::configuration::{presets, Configuration};
use libnbt::constants::{INS_PUT_DATA, INS_SET_CONFIGURATION};
use libnbt::types::{
    Application, CommunicationInterface, ConfigurationTag, FileAccessPolicy, FileId, GpioFunction,
};
use libnbt::Error;

#[test]
fn handover_preset_applies_policies_then_tags() {
    let (mut tag, sim) = common::simulated();
    let config = presets::wifi_connection_handover();

    let updated = tag.configure(&config).unwrap();
    // the FAP file starts open on a fresh simulator and already matches
    assert_eq!(
        updated,
        vec![
            FileId::CapabilityContainer,
            FileId::Ndef,
            FileId::Proprietary1,
            FileId::Proprietary2,
            FileId::Proprietary3,
            FileId::Proprietary4,
        ]
    );
    for policy in &config.policies {
        assert!(sim.policies().contains(policy));
    }
    assert_eq!(
        sim.configuration(ConfigurationTag::CommunicationInterface),
        Some(CommunicationInterface::NfcEnabledI2cEnabled as u8)
    );
    assert_eq!(
        sim.configuration(ConfigurationTag::GpioFunction),
        Some(GpioFunction::Disabled as u8)
    );

    // tag-level settings go out after every policy update
    let commands = sim.commands();
    let last_policy = commands.iter().rposition(|c| c.ins == INS_PUT_DATA).unwrap();
    let first_config = commands
        .iter()
        .position(|c| c.ins == INS_SET_CONFIGURATION)
        .unwrap();
    assert!(last_policy < first_config);
    assert_eq!(sim.selected_application(), Some(Application::Configurator));
}

#[test]
fn duplicate_policy_rejected_before_exchange() {
    let (mut tag, sim) = common::simulated();
    let config = Configuration {
        policies: vec![
            FileAccessPolicy::open(FileId::Proprietary1),
            FileAccessPolicy::locked(FileId::Proprietary1),
        ],
        communication_interface: CommunicationInterface::NfcEnabledI2cEnabled,
        irq_function: GpioFunction::Disabled,
    };
    assert!(matches!(
        tag.configure(&config),
        Err(Error::DuplicatePolicy { .. })
    ));
    assert!(sim.commands().is_empty());
}

#[test]
fn interface_setters_are_independent() {
    let (mut tag, sim) = common::simulated();
    tag.set_gpio_function(GpioFunction::PassThroughIrq).unwrap();
    assert_eq!(sim.configuration(ConfigurationTag::GpioFunction), Some(0x03));
    assert_eq!(
        sim.configuration(ConfigurationTag::CommunicationInterface),
        None
    );

    tag.set_communication_interface(CommunicationInterface::NfcDisabledI2cEnabled)
        .unwrap();
    assert_eq!(
        sim.configuration(ConfigurationTag::CommunicationInterface),
        Some(0x01)
    );
}
