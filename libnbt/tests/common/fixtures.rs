// libnbt/tests/common/fixtures.rs: shared test payloads and policy tables

use libnbt::types::{AccessCondition, FileAccessPolicy, FileId};

/// Policy table as reported by a tag fresh from the factory.
pub fn factory_policies() -> Vec<FileAccessPolicy> {
    use AccessCondition::{Always, Never};
    vec![
        FileAccessPolicy::new(FileId::CapabilityContainer, Always, Never, Always, Never),
        FileAccessPolicy::new(FileId::Ndef, Always, Always, Always, Never),
        FileAccessPolicy::open(FileId::FileAccessPolicy),
        FileAccessPolicy::open(FileId::Proprietary1),
        FileAccessPolicy::open(FileId::Proprietary2),
        FileAccessPolicy::open(FileId::Proprietary3),
        FileAccessPolicy::open(FileId::Proprietary4),
    ]
}

/// `factory_policies` in the reverse of the tag's usual reporting order.
pub fn shuffled_factory_policies() -> Vec<FileAccessPolicy> {
    let mut policies = factory_policies();
    policies.reverse();
    policies
}

/// Deterministic payload of `len` bytes.
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}

/// Short record carrying a URI, used as an opaque NDEF message.
pub fn sample_ndef_message() -> Vec<u8> {
    let uri = b"example.com/handover";
    let mut msg = vec![0xD1, 0x01, (uri.len() + 1) as u8, b'U', 0x04];
    msg.extend_from_slice(uri);
    msg
}

pub fn hex_bytes(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).unwrap()
}
