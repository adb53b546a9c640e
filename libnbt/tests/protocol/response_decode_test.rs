use libnbt::protocol::{decode_policies, Response};
use libnbt::types::{AccessCondition, FileAccessPolicy, FileId, StatusWord};
use libnbt::Error;

#[test]
fn response_keeps_data_and_status() {
    let resp = Response::decode(&[0x10, 0x20, 0x63, 0xC1]).unwrap();
    assert_eq!(resp.data, vec![0x10, 0x20]);
    assert_eq!(resp.sw, StatusWord::new(0x63C1));
    assert!(!resp.is_success());
}

#[test]
fn policy_table_decodes_password_conditions() {
    let mut bytes = Vec::new();
    for id in FileId::ALL {
        let mut policy = FileAccessPolicy::open(id);
        if id == FileId::Proprietary2 {
            policy.i2c_write = AccessCondition::Password(31);
        }
        bytes.extend_from_slice(&policy.encode());
    }

    let policies = decode_policies(&bytes).unwrap();
    let p2 = policies
        .iter()
        .find(|p| p.file_id == FileId::Proprietary2)
        .unwrap();
    assert_eq!(p2.i2c_write, AccessCondition::Password(31));
    assert_eq!(p2.encode()[3], 0x5F);
}

#[test]
fn policy_record_for_unknown_file_is_rejected() {
    let mut bytes: Vec<u8> = FileId::ALL
        .iter()
        .flat_map(|&id| FileAccessPolicy::open(id).encode())
        .collect();
    bytes[0] = 0xE2;
    match decode_policies(&bytes) {
        Err(Error::InvalidRecord(msg)) => assert!(msg.contains("0xe203")),
        other => panic!("expected InvalidRecord, got {:?}", other),
    }
}
