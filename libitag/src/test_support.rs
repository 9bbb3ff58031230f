//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize response-buffer construction so tests across the
//! crate and tests/ directory build the same wire shapes.
#![allow(dead_code)]

use crate::constants;

/// Build a GetTagId success response: header, success status, command id,
/// reserved byte, then the tagId/nonce fixed region.
#[doc(hidden)]
pub fn tag_data_response(tag_id: [u8; 16], nonce: [u8; 8]) -> Vec<u8> {
    let mut raw = vec![0x00, 0x00];
    raw.extend_from_slice(&constants::STATUS_SUCCESS);
    raw.extend_from_slice(&constants::CMD_GET_TAG_ID);
    raw.push(0x00); // reserved byte 6
    raw.extend_from_slice(&tag_id);
    raw.extend_from_slice(&nonce);
    raw
}

/// Build a data-bearing success response: 10-byte prefix, the TLV payload,
/// then the 2-byte footer.
#[doc(hidden)]
pub fn flight_data_response(tlv: &[u8]) -> Vec<u8> {
    let mut raw = vec![0x00, 0x00];
    raw.extend_from_slice(&constants::STATUS_SUCCESS);
    raw.extend_from_slice(&constants::CMD_GET_FLIGHT_DATA);
    raw.resize(constants::RESPONSE_PAYLOAD_PREFIX, 0x00);
    raw.extend_from_slice(tlv);
    raw.extend_from_slice(&[0x00; constants::RESPONSE_FOOTER_LEN]);
    raw
}

/// Build a minimal error response carrying the given status code.
#[doc(hidden)]
pub fn error_response(status: [u8; 2]) -> Vec<u8> {
    let mut raw = vec![0x00, 0x00];
    raw.extend_from_slice(&status);
    raw.extend_from_slice(&[0x00, 0x00]); // echoed command id
    raw
}
