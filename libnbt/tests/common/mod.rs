#![allow(dead_code)]

pub mod fixtures;

use libnbt::tag::{Active, Tag};
use libnbt::transport::SimulatedTag;

/// Install a test logger; repeated calls are harmless.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Active tag driving a fresh simulator, plus the simulator for inspection.
pub fn simulated() -> (Tag<Active>, SimulatedTag) {
    init_logger();
    libnbt::test_support::active_simulated_tag().unwrap()
}
