//! Configure a tag for Wi-Fi connection handover and publish an NDEF
//! message, against the in-memory simulated tag.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p libnbt --example configure_handover

use std::thread;

use anyhow::{Context, Result};
use libnbt::configuration::presets;
use libnbt::constants::DEFAULT_I2C_ADDRESS;
use libnbt::tag::TagBuilder;
use libnbt::transport::SimulatedTag;
use libnbt::types::FileId;

fn handover_message() -> Vec<u8> {
    // NDEF short record, MIME type "application/vnd.wfa.wsc", empty payload
    let mime = b"application/vnd.wfa.wsc";
    let mut msg = vec![0xD2, mime.len() as u8, 0x00];
    msg.extend_from_slice(mime);
    msg
}

fn main() -> Result<()> {
    env_logger::init();

    let sim = SimulatedTag::new();
    let mut tag = TagBuilder::new()
        .with_transport(Box::new(sim.clone()))
        .build_active()
        .context("activating channel")?;
    println!(
        "tag at I2C address {:#04x}, ATPO: {}",
        DEFAULT_I2C_ADDRESS,
        hex::encode_upper(tag.atpo())
    );

    let updated = tag
        .configure(&presets::wifi_connection_handover())
        .context("applying handover configuration")?;
    println!("updated policies: {:?}", updated);

    // The write workflow runs on a worker thread; the handle moves there
    // and comes back when it is done.
    let worker = thread::spawn(move || -> libnbt::Result<_> {
        tag.select_application()?;
        tag.write_ndef_message(&handover_message())?;
        Ok(tag)
    });
    let mut tag = worker
        .join()
        .map_err(|_| anyhow::anyhow!("write worker panicked"))??;

    let message = tag.read_ndef_message().context("reading NDEF message")?;
    println!("NDEF message ({} bytes): {}", message.len(), hex::encode_upper(&message));

    let cc = tag.read_file_to_vec(FileId::CapabilityContainer, 0, 15)?;
    println!("CC: {}", hex::encode_upper(&cc));

    match tag.write_file(FileId::CapabilityContainer, 0, &[0x00]) {
        Ok(()) => println!("unexpected: CC write accepted"),
        Err(e) => println!("CC write rejected as configured: {}", e),
    }
    println!("simulator saw {} commands", sim.commands().len());
    Ok(())
}
