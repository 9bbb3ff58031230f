#[path = "../common/mod.rs"]
mod common;

use libitag::flight;
use libitag::layout::{self, LayoutType};
use libitag::session::TagSession;
use libitag::transport::MockTransport;
use libitag::{Error, FieldError};

fn connected_session(responses: Vec<Vec<u8>>) -> TagSession<MockTransport> {
    let mut transport = MockTransport::new();
    transport.push_response(common::fixtures::tag_data_response());
    for resp in responses {
        transport.push_response(resp);
    }
    TagSession::new(transport)
}

#[test]
fn get_flight_data_decodes_the_stored_record() {
    let record = common::fixtures::sample_record_full();
    let tlv = flight::encode(&record).unwrap();
    let mut session =
        connected_session(vec![common::fixtures::flight_data_response(&tlv)]);

    let read = session.get_flight_data().unwrap();
    assert_eq!(read, Some(record));
}

#[test]
fn get_flight_data_on_a_blank_tag_is_none() {
    let mut session = connected_session(vec![common::fixtures::flight_data_response(&[0xFF])]);
    assert_eq!(session.get_flight_data().unwrap(), None);
}

#[test]
fn first_command_connects_implicitly() {
    let tlv = flight::encode(&common::fixtures::sample_record()).unwrap();
    let mut session =
        connected_session(vec![common::fixtures::flight_data_response(&tlv)]);

    session.get_flight_data().unwrap();

    let sent = &session.transport().sent;
    assert_eq!(sent.len(), 2);
    assert_eq!(&sent[0][28..30], &[0x00, 0x10]); // GetTagId first
    assert_eq!(&sent[1][28..30], &[0x03, 0x10]); // then GetFlightData
    // second command echoes the adopted context
    assert_eq!(&sent[1][4..20], &common::fixtures::sample_tag_id_bytes());
    assert_eq!(&sent[1][20..28], &common::fixtures::sample_nonce_bytes());
}

#[test]
fn update_data_writes_the_encoded_record() {
    let record = common::fixtures::sample_record();
    let tlv = flight::encode(&record).unwrap();
    let mut session =
        connected_session(vec![common::fixtures::error_response([0x00, 0x20])]);

    session.update_data(&record).unwrap();

    let sent = &session.transport().sent[1];
    assert_eq!(&sent[28..30], &[0x02, 0x10]);
    let n = tlv.len();
    assert_eq!(&sent[30..32], &[(n & 0xFF) as u8, ((n >> 8) & 0xFF) as u8]);
    assert_eq!(&sent[32..32 + n], &tlv[..]);
}

#[test]
fn update_data_rejects_invalid_records_before_transmitting() {
    let mut record = common::fixtures::sample_record();
    record.destination = "LAXX".into(); // must be exactly 3 chars
    let mut session = connected_session(vec![]);

    match session.update_data(&record) {
        Err(Error::Field(FieldError::InvalidDestinationLength)) => {}
        other => panic!("expected InvalidDestinationLength, got: {:?}", other),
    }
    assert!(session.transport().sent.is_empty());
}

#[test]
fn update_layout_sends_the_embedded_blob() {
    let blob = layout::lookup(LayoutType::OneSector);
    let mut session =
        connected_session(vec![common::fixtures::error_response([0x00, 0x20])]);

    session.update_layout(LayoutType::OneSector).unwrap();

    let sent = &session.transport().sent[1];
    assert_eq!(&sent[28..30], &[0x01, 0x10]);
    assert_eq!(&sent[32..32 + blob.payload.len()], &blob.payload[..]);
}
