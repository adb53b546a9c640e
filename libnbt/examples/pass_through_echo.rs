//! Answer APDUs relayed through the pass-through channel, against the
//! in-memory simulated tag.
//!
//! Usage:
//!   RUST_LOG=trace cargo run -p libnbt --example pass_through_echo --features diagnostics

use anyhow::Result;
use libnbt::protocol::{Apdu, Response};
use libnbt::tag::TagBuilder;
use libnbt::transport::SimulatedTag;
use libnbt::types::{GpioFunction, StatusWord};

fn main() -> Result<()> {
    env_logger::init();

    let sim = SimulatedTag::new();
    sim.push_pass_through_apdu(&Apdu::new(0x00, 0xA4, 0x04, 0x00).with_data(vec![0xF0, 0x01]))?;
    sim.push_pass_through_apdu(&Apdu::new(0x80, 0x01, 0x00, 0x00).with_data(b"ping".to_vec()))?;

    let mut tag = TagBuilder::new()
        .with_transport(Box::new(sim.clone()))
        .with_timeout(200)
        .build_active()?;
    tag.set_gpio_function(GpioFunction::PassThroughIrq)?;

    for _ in 0..2 {
        let apdu = tag.get_passthrough_apdu()?;
        println!(
            "relayed APDU: CLA {:02X} INS {:02X} data {}",
            apdu.cla,
            apdu.ins,
            hex::encode_upper(&apdu.data)
        );
        let response = match apdu.ins {
            0x01 => Response::success(apdu.data.clone()),
            _ => Response::new(Vec::new(), StatusWord::new(0x6D00)),
        };
        tag.set_passthrough_response(&response)?;
    }

    for response in sim.pass_through_responses() {
        println!("forwarded: {}", hex::encode_upper(response.encode()));
    }
    Ok(())
}
