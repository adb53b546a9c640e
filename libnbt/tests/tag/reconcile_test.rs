#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{factory_policies, shuffled_factory_policies};
use libnbt::constants::{INS_PUT_DATA, INS_SELECT};
use libnbt::types::{AccessCondition, FileAccessPolicy, FileId};
use libnbt::{Error, ErrorKind};
use proptest::prelude::*;

#[test]
fn single_ndef_change_issues_one_update() {
    let (mut tag, sim) = common::simulated();
    let mut current = factory_policies();
    current[1].nfc_write = AccessCondition::Never;
    sim.set_policies(current.clone());

    let mut desired = current.clone();
    desired[1].nfc_write = AccessCondition::Always;

    let updated = tag.reconcile_policies(&desired).unwrap();
    assert_eq!(updated, vec![FileId::Ndef]);
    assert_eq!(sim.count(INS_PUT_DATA), 1);

    let update = sim
        .commands()
        .into_iter()
        .find(|c| c.ins == INS_PUT_DATA)
        .unwrap();
    assert_eq!(&update.data[..2], &[0xE1, 0x04]);
    assert_eq!(sim.policies()[1].nfc_write, AccessCondition::Always);
}

#[test]
fn matching_is_by_file_id_not_position() {
    let (mut tag, sim) = common::simulated();
    sim.set_policies(shuffled_factory_policies());

    let updated = tag.reconcile_policies(&factory_policies()).unwrap();
    assert!(updated.is_empty());
    assert_eq!(sim.count(INS_PUT_DATA), 0);
}

#[test]
fn second_pass_is_idempotent() {
    let (mut tag, sim) = common::simulated();
    let desired = libnbt::configuration::presets::wifi_connection_handover().policies;

    let first = tag.reconcile_policies(&desired).unwrap();
    assert!(!first.is_empty());
    sim.clear_commands();

    let second = tag.reconcile_policies(&desired).unwrap();
    assert!(second.is_empty());
    assert_eq!(sim.count(INS_PUT_DATA), 0);
}

#[test]
fn unknown_raw_file_id_fails_before_any_exchange() {
    let (_tag, sim) = common::simulated();
    let err = FileAccessPolicy::try_new(
        0xE1A5,
        AccessCondition::Always,
        AccessCondition::Always,
        AccessCondition::Always,
        AccessCondition::Always,
    )
    .unwrap_err();
    assert!(matches!(err, Error::UnknownFileId(0xE1A5)));
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert!(sim.commands().is_empty());
}

#[test]
fn duplicated_tag_record_fails_before_updates() {
    let (mut tag, sim) = common::simulated();
    let mut current = factory_policies();
    current[6] = FileAccessPolicy::open(FileId::Proprietary3);
    sim.set_policies(current);

    let desired = [
        FileAccessPolicy::locked(FileId::Proprietary4),
        FileAccessPolicy::locked(FileId::Proprietary1),
    ];
    let err = tag.reconcile_policies(&desired).unwrap_err();
    assert!(matches!(err, Error::InvalidRecord(_)));
    assert_eq!(err.kind(), ErrorKind::DataIntegrity);
    assert_eq!(sim.count(INS_PUT_DATA), 0);
}

#[test]
fn oversized_password_id_is_rejected_before_any_exchange() {
    let (mut tag, sim) = common::simulated();
    let mut desired = FileAccessPolicy::open(FileId::Proprietary1);
    desired.nfc_write = AccessCondition::Password(40);

    let err = tag.reconcile_policies(&[desired]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert!(sim.commands().is_empty());
    assert_eq!(sim.policies()[3], FileAccessPolicy::open(FileId::Proprietary1));
}

#[test]
fn failed_select_stops_reconciliation() {
    let (mut tag, sim) = common::simulated();
    sim.fail_after(INS_SELECT, 0, 0x6A82);

    let err = tag.reconcile_policies(&factory_policies()).unwrap_err();
    assert_eq!(err.status_word().map(|sw| sw.as_u16()), Some(0x6A82));
    assert_eq!(sim.commands().len(), 1);
}

fn condition() -> impl Strategy<Value = AccessCondition> {
    prop_oneof![
        Just(AccessCondition::Always),
        Just(AccessCondition::Never),
        (0u8..32).prop_map(AccessCondition::Password),
    ]
}

proptest! {
    #[test]
    fn updates_exactly_the_differing_files(
        conditions in prop::collection::vec((condition(), condition(), condition(), condition()), 7)
    ) {
        let (mut tag, sim) = common::simulated();
        let desired: Vec<FileAccessPolicy> = FileId::ALL
            .iter()
            .zip(conditions)
            .map(|(&id, (a, b, c, d))| FileAccessPolicy::new(id, a, b, c, d))
            .collect();
        let expected: Vec<FileId> = desired
            .iter()
            .filter(|p| !p.matches(&FileAccessPolicy::open(p.file_id)))
            .map(|p| p.file_id)
            .collect();

        let updated = tag.reconcile_policies(&desired).unwrap();
        prop_assert_eq!(updated, expected);
        prop_assert_eq!(sim.policies(), desired);
    }
}
