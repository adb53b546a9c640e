use libnbt::tag::TagBuilder;
use libnbt::test_support::{boxed_mock_with_responses, ok_response};
use libnbt::transport::MockTransport;
use libnbt::types::FileId;
use libnbt::{Error, ErrorKind};

#[test]
fn timeout_mid_read_is_transport_error() {
    // select succeeds, first chunk arrives, second chunk never does
    let transport = boxed_mock_with_responses(vec![ok_response(&[]), ok_response(&[0x11; 255])]);
    let mut tag = TagBuilder::new()
        .with_transport(transport)
        .build_active()
        .unwrap();

    let mut buf = vec![0u8; 300];
    let err = tag.read_file(FileId::Ndef, 0, &mut buf).unwrap_err();
    assert!(matches!(err, Error::Timeout));
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status_word(), None);
    // the chunk read before the failure is kept
    assert!(buf[..255].iter().all(|&b| b == 0x11));
}

#[test]
fn receive_failure_surfaces_untouched() {
    let mut mock = MockTransport::new();
    mock.push_ok(&[]);
    mock.set_receive_failures(1);
    let mut tag = TagBuilder::new()
        .with_transport(Box::new(mock))
        .build_active()
        .unwrap();

    assert!(matches!(tag.select_application(), Err(Error::Timeout)));
    // the queued response is still there for the next exchange
    tag.select_application().unwrap();
}
