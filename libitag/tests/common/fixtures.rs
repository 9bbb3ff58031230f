// fixtures.rs — provides commonly used records and response buffers

use libitag::flight::FlightData;
use libitag::test_support;
use libitag::types::{Nonce, TagContext, TagId};

pub fn sample_tag_id_bytes() -> [u8; 16] {
    [
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
        0x10,
    ]
}

pub fn sample_nonce_bytes() -> [u8; 8] {
    [0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8]
}

pub fn sample_context() -> TagContext {
    TagContext::new(
        TagId::from_bytes(sample_tag_id_bytes()),
        Nonce::from_bytes(sample_nonce_bytes()),
    )
}

pub fn sample_record() -> FlightData {
    FlightData::new(
        "Jane Doe", "DYH2IB", "0123456789", "ELITE P1", "LAX", "05Dec", "NZ538",
    )
}

pub fn sample_record_full() -> FlightData {
    let mut record = sample_record();
    record.destination2 = Some("SFO".into());
    record.flight_date2 = Some("06Dec".into());
    record.flight_number2 = Some("NZ8102".into());
    record.destination3 = Some("AKL".into());
    record.flight_date3 = Some("07Dec".into());
    record.flight_number3 = Some("NZ410".into());
    record.eu_indicator = Some("N".into());
    record.tag_origin = Some("LHR".into());
    record.security_sequence_number = Some("0042".into());
    record
}

pub fn tag_data_response() -> Vec<u8> {
    test_support::tag_data_response(sample_tag_id_bytes(), sample_nonce_bytes())
}

pub fn flight_data_response(tlv: &[u8]) -> Vec<u8> {
    test_support::flight_data_response(tlv)
}

pub fn error_response(status: [u8; 2]) -> Vec<u8> {
    test_support::error_response(status)
}
