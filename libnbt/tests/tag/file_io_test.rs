#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{pattern, sample_ndef_message};
use libnbt::constants::{INS_READ_BINARY, INS_SELECT, INS_UPDATE_BINARY};
use libnbt::test_support::{active_mock_tag, ok_response, status_response};
use libnbt::types::{FileAccessPolicy, FileId};
use libnbt::{Error, ErrorKind};
use proptest::prelude::*;

#[test]
fn read_300_bytes_takes_two_chunks() {
    let (mut tag, sim) = common::simulated();
    tag.select_application().unwrap();
    let content = pattern(300);
    sim.load_file(FileId::Ndef, 0, &content);

    let data = tag.read_file_to_vec(FileId::Ndef, 0, 300).unwrap();
    assert_eq!(data, content);

    let reads: Vec<_> = sim
        .commands()
        .into_iter()
        .filter(|c| c.ins == INS_READ_BINARY)
        .collect();
    assert_eq!(reads.len(), 2);
    assert_eq!((reads[0].p1p2(), reads[0].le), (0, Some(255)));
    assert_eq!((reads[1].p1p2(), reads[1].le), (255, Some(45)));
}

#[test]
fn out_of_range_read_sends_nothing() {
    let (mut tag, sim) = common::simulated();
    let mut buf = [0u8; 2];
    let err = tag.read_file(FileId::Proprietary1, 4095, &mut buf).unwrap_err();
    assert!(matches!(
        err,
        Error::OutOfRange {
            offset: 4095,
            length: 2,
            limit: 4096
        }
    ));
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert!(sim.commands().is_empty());
}

#[test]
fn zero_length_write_only_selects() {
    let (mut tag, sim) = common::simulated();
    tag.select_application().unwrap();
    sim.clear_commands();

    tag.write_file(FileId::Proprietary2, 4096, &[]).unwrap();
    assert_eq!(sim.commands().len(), 1);
    assert_eq!(sim.count(INS_SELECT), 1);
}

#[test]
fn failing_chunk_stops_write_without_rollback() {
    let (mut tag, sim) = common::simulated();
    tag.select_application().unwrap();
    sim.fail_after(INS_UPDATE_BINARY, 1, 0x6581);

    let data = pattern(600);
    match tag.write_file(FileId::Proprietary3, 10, &data) {
        Err(Error::Status { sw, .. }) => assert_eq!(sw.as_u16(), 0x6581),
        other => panic!("expected Status error, got {:?}", other),
    }
    // first chunk stays written, the third is never attempted
    assert_eq!(sim.count(INS_UPDATE_BINARY), 2);
    let file = sim.file(FileId::Proprietary3);
    assert_eq!(&file[10..265], &data[..255]);
    assert!(file[265..610].iter().all(|&b| b == 0));
}

#[test]
fn status_error_on_first_chunk_stops_read() {
    let (mut tag, log) = active_mock_tag(vec![
        ok_response(&[]),
        status_response(0x6982),
        ok_response(&[0u8; 45]),
    ])
    .unwrap();
    let mut buf = vec![0u8; 300];
    let err = tag.read_file(FileId::Ndef, 0, &mut buf).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ProtocolStatus);
    assert_eq!(err.status_word().unwrap().as_u16(), 0x6982);
    assert_eq!(log.lock().unwrap().len(), 2);
}

#[test]
fn i2c_read_denied_surfaces_status() {
    let (mut tag, sim) = common::simulated();
    sim.set_policy(FileAccessPolicy::locked(FileId::Proprietary4));
    tag.select_application().unwrap();
    let err = tag.read_file_to_vec(FileId::Proprietary4, 0, 8).unwrap_err();
    assert_eq!(err.status_word().unwrap().as_u16(), 0x6982);
}

#[test]
fn file_operations_need_operational_application() {
    let (mut tag, _sim) = common::simulated();
    tag.select_configurator_application().unwrap();
    let err = tag.read_file_to_vec(FileId::Ndef, 0, 4).unwrap_err();
    assert_eq!(err.status_word().unwrap().as_u16(), 0x6985);
}

#[test]
fn ndef_message_round_trip() {
    let (mut tag, sim) = common::simulated();
    tag.select_application().unwrap();
    let message = sample_ndef_message();
    tag.write_ndef_message(&message).unwrap();

    let file = sim.file(FileId::Ndef);
    assert_eq!(u16::from_be_bytes([file[0], file[1]]) as usize, message.len());
    assert_eq!(tag.read_ndef_message().unwrap(), message);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn write_then_read_returns_same_bytes(
        offset in 0u16..4096,
        data in prop::collection::vec(any::<u8>(), 0..1200),
    ) {
        let (mut tag, sim) = common::simulated();
        tag.select_application().unwrap();
        let len = data.len().min(4096 - offset as usize);
        let data = &data[..len];

        tag.write_file(FileId::Proprietary1, offset, data).unwrap();
        sim.clear_commands();
        let back = tag.read_file_to_vec(FileId::Proprietary1, offset, len).unwrap();

        prop_assert_eq!(back.as_slice(), data);
        prop_assert_eq!(sim.count(INS_READ_BINARY), len.div_ceil(255));
    }

    #[test]
    fn ranges_past_limit_are_rejected(offset in 0u16..4096, extra in 1usize..300) {
        let (mut tag, sim) = common::simulated();
        let len = 4096 - offset as usize + extra;
        let res = tag.read_file_to_vec(FileId::Ndef, offset, len);
        let is_out_of_range = matches!(res, Err(Error::OutOfRange { .. }));
        prop_assert!(is_out_of_range);
        prop_assert!(sim.commands().is_empty());
    }
}
