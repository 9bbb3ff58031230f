#[path = "../common/mod.rs"]
mod common;

use libitag::protocol::ApduError;
use libitag::session::TagSession;
use libitag::transport::MockTransport;
use libitag::Error;

fn session_with(responses: Vec<Vec<u8>>) -> TagSession<MockTransport> {
    let mut transport = MockTransport::new();
    for resp in responses {
        transport.push_response(resp);
    }
    TagSession::new(transport)
}

#[test]
fn connect_adopts_the_tag_context() {
    let mut session = session_with(vec![common::fixtures::tag_data_response()]);

    let ctx = session.connect().unwrap();
    assert_eq!(ctx.tag_id.as_bytes(), &common::fixtures::sample_tag_id_bytes());
    assert_eq!(ctx.nonce.as_bytes(), &common::fixtures::sample_nonce_bytes());
}

#[test]
fn connect_sends_a_zero_context() {
    let mut session = session_with(vec![common::fixtures::tag_data_response()]);
    session.connect().unwrap();

    let sent = &session.transport().sent[0];
    assert_eq!(&sent[28..30], &[0x00, 0x10]);
    assert_eq!(&sent[4..20], &[0u8; 16]);
    assert_eq!(&sent[20..28], &[0u8; 8]);
}

#[test]
fn connect_surfaces_device_errors() {
    let mut session = session_with(vec![common::fixtures::error_response([0x03, 0x40])]);

    match session.connect() {
        Err(Error::Apdu(ApduError::InvalidTagId)) => {}
        other => panic!("expected InvalidTagId, got: {:?}", other),
    }
}

#[test]
fn connect_rejects_a_truncated_success() {
    // success status but no fixed tagId/nonce region
    let mut session = session_with(vec![common::fixtures::error_response([0x00, 0x20])]);

    match session.connect() {
        Err(Error::Apdu(ApduError::MissingDataInResponse)) => {}
        other => panic!("expected MissingDataInResponse, got: {:?}", other),
    }
}

#[test]
fn transport_failure_propagates() {
    let mut transport = MockTransport::new();
    transport.set_failures(1);
    let mut session = TagSession::new(transport);

    assert!(matches!(session.connect(), Err(Error::Timeout)));
}
