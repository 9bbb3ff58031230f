#[path = "../common/mod.rs"]
mod common;

use libitag::protocol::{ApduError, Response};
use libitag::Error;

#[test]
fn tag_data_response_exposes_the_context() {
    let raw = common::fixtures::tag_data_response();
    let resp = Response::parse(&raw).unwrap();

    assert!(Response::is_success(&raw));
    let ctx = resp.context().expect("fixed region present");
    assert_eq!(ctx.tag_id.as_bytes(), &common::fixtures::sample_tag_id_bytes());
    assert_eq!(ctx.nonce.as_bytes(), &common::fixtures::sample_nonce_bytes());
}

#[test]
fn short_success_response_has_no_context() {
    let raw = common::fixtures::error_response([0x00, 0x20]);
    let resp = Response::parse(&raw).unwrap();

    assert!(Response::is_success(&raw));
    assert!(resp.context().is_none());
    assert!(resp.payload().is_empty());
}

#[test]
fn payload_sits_between_prefix_and_footer() {
    let tlv = [0x07, 0x03, b'1', b'2', b'3', 0xFF];
    let raw = common::fixtures::flight_data_response(&tlv);
    let resp = Response::parse(&raw).unwrap();

    assert_eq!(resp.payload(), &tlv);
}

#[test]
fn empty_tlv_region_yields_empty_payload() {
    let raw = common::fixtures::flight_data_response(&[]);
    let resp = Response::parse(&raw).unwrap();
    assert!(resp.payload().is_empty());
}

#[test]
fn parse_rejects_sub_minimum_buffers() {
    assert!(matches!(
        Response::parse(&[]),
        Err(Error::Apdu(ApduError::EmptyResponse))
    ));
    for len in 1..6 {
        let raw = vec![0u8; len];
        assert!(
            matches!(
                Response::parse(&raw),
                Err(Error::Apdu(ApduError::MissingDataInResponse))
            ),
            "len {len}"
        );
    }
}

#[test]
fn classify_error_checks_framing_before_status() {
    assert_eq!(Response::classify_error(&[]), ApduError::EmptyResponse);
    assert_eq!(
        Response::classify_error(&[0x00, 0x00, 0x04]),
        ApduError::MissingDataInResponse
    );

    let raw = common::fixtures::error_response([0x04, 0x40]);
    assert_eq!(Response::classify_error(&raw), ApduError::InvalidNonce);

    let raw = common::fixtures::error_response([0x0A, 0x40]);
    assert_eq!(Response::classify_error(&raw), ApduError::IncompleteResponse);
}

#[test]
fn is_success_is_false_on_short_buffers() {
    assert!(!Response::is_success(&[]));
    assert!(!Response::is_success(&[0x00, 0x00, 0x00]));
}

#[test]
fn command_id_echo_is_preserved() {
    let raw = common::fixtures::tag_data_response();
    let resp = Response::parse(&raw).unwrap();
    assert_eq!(resp.command_id(), [0x00, 0x10]);
}
