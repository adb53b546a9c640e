#[path = "../common/mod.rs"]
mod common;

use libnbt::protocol::{Apdu, Response};
use libnbt::types::StatusWord;
use libnbt::{Error, ErrorKind};

#[test]
fn relayed_apdu_is_fetched_and_answered() {
    let (mut tag, sim) = common::simulated();
    let relayed = Apdu::new(0x00, 0xB0, 0x00, 0x00).with_le(0x20);
    sim.push_pass_through_apdu(&relayed).unwrap();

    let apdu = tag.get_passthrough_apdu().unwrap();
    assert_eq!(apdu, relayed);

    // inner failure travels as payload; the outer exchange still succeeds
    let answer = Response::status(0x6A82);
    tag.set_passthrough_response(&answer).unwrap();
    assert_eq!(sim.pass_through_responses(), vec![answer]);
}

#[test]
fn pass_through_needs_no_selection() {
    let (mut tag, sim) = common::simulated();
    sim.push_pass_through_apdu(&Apdu::new(0x80, 0x10, 0x00, 0x00)).unwrap();
    tag.get_passthrough_apdu().unwrap();
    assert_eq!(sim.selected_application(), None);
}

#[test]
fn malformed_blob_is_decode_error_not_success() {
    let (mut tag, sim) = common::simulated();
    sim.push_pass_through_raw(vec![0x00, 0x10, 0x00, 0xA4]);
    let err = tag.get_passthrough_apdu().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);

    sim.push_pass_through_raw(vec![0x00, 0x00]);
    assert!(matches!(
        tag.get_passthrough_apdu(),
        Err(Error::MalformedBlob(_))
    ));
}

#[test]
fn empty_inbox_is_protocol_error() {
    let (mut tag, _sim) = common::simulated();
    let err = tag.get_passthrough_apdu().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ProtocolStatus);
    assert_eq!(err.status_word(), Some(StatusWord::new(0x6A88)));
}
