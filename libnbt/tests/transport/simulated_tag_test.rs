use libnbt::protocol::{Command, Response};
use libnbt::transport::{SimulatedTag, Transport};
use libnbt::types::{Application, FileId};

fn run(sim: &mut SimulatedTag, cmd: Command) -> Response {
    let raw = sim.transceive(&cmd.encode().unwrap(), 100).unwrap();
    Response::decode(&raw).unwrap()
}

#[test]
fn unknown_instruction_is_rejected() {
    let mut sim = SimulatedTag::new();
    let raw = sim.transceive(&[0x00, 0x20, 0x00, 0x00], 100).unwrap();
    assert_eq!(raw, vec![0x6D, 0x00]);
    let raw = sim.transceive(&[0x90, 0x20, 0x00, 0x00], 100).unwrap();
    assert_eq!(raw, vec![0x6E, 0x00]);
}

#[test]
fn unknown_application_is_not_found() {
    let mut sim = SimulatedTag::new();
    let raw = sim
        .transceive(&[0x00, 0xA4, 0x04, 0x00, 0x02, 0xA0, 0x00, 0x00], 100)
        .unwrap();
    assert_eq!(raw, vec![0x6A, 0x82]);
}

#[test]
fn read_past_file_end_is_wrong_p1p2() {
    let mut sim = SimulatedTag::new();
    run(
        &mut sim,
        Command::SelectApplication {
            application: Application::Nbt,
        },
    );
    run(
        &mut sim,
        Command::SelectFile {
            file_id: FileId::Ndef,
        },
    );
    let resp = run(
        &mut sim,
        Command::ReadBinary {
            offset: 4000,
            length: 200,
        },
    );
    assert_eq!(resp.sw.as_u16(), 0x6B00);
}

#[test]
fn reset_clears_selection() {
    let mut sim = SimulatedTag::new();
    run(
        &mut sim,
        Command::SelectApplication {
            application: Application::Configurator,
        },
    );
    assert_eq!(sim.selected_application(), Some(Application::Configurator));
    sim.reset().unwrap();
    assert_eq!(sim.selected_application(), None);
}
