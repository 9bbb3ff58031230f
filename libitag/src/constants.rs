// libitag/src/constants.rs

//! Wire-format constants for the iTag APDU layout.
//!
//! The tag speaks one fixed layout; every offset and width here must match
//! the device bit-for-bit.

/// Origin type byte prepended to every outgoing request.
pub const ORIGIN_TYPE: u8 = 0x01;

/// Width of the zeroed apiVersion field in a request.
pub const API_VERSION_LEN: usize = 3;
/// Width of the tag identifier.
pub const TAG_ID_LEN: usize = 16;
/// Width of the session nonce.
pub const NONCE_LEN: usize = 8;
/// Width of a command identifier.
pub const COMMAND_ID_LEN: usize = 2;
/// Width of the little-endian payload length field.
pub const PAYLOAD_LENGTH_LEN: usize = 2;
/// Width of the zeroed trailing signature.
pub const SIGNATURE_LEN: usize = 64;

/// Fixed request size excluding the payload:
/// originType(1) + apiVersion(3) + tagId(16) + nonce(8) + commandId(2)
/// + payloadLength(2) + signature(64).
pub const COMMAND_FIXED_LEN: usize = 1
    + API_VERSION_LEN
    + TAG_ID_LEN
    + NONCE_LEN
    + COMMAND_ID_LEN
    + PAYLOAD_LENGTH_LEN
    + SIGNATURE_LEN;

/// GetTagId command identifier. Establishes the session context.
pub const CMD_GET_TAG_ID: [u8; 2] = [0x00, 0x10];
/// UpdateLayout command identifier.
pub const CMD_UPDATE_LAYOUT: [u8; 2] = [0x01, 0x10];
/// UpdateData command identifier.
pub const CMD_UPDATE_DATA: [u8; 2] = [0x02, 0x10];
/// GetFlightData command identifier.
pub const CMD_GET_FLIGHT_DATA: [u8; 2] = [0x03, 0x10];
/// GetPreviousResponse command identifier (continuation retransmit).
pub const CMD_GET_PREVIOUS_RESPONSE: [u8; 2] = [0x04, 0x10];

/// Response offset of the 2-byte header.
pub const RESPONSE_HEADER_OFFSET: usize = 0;
/// Response offset of the 2-byte status code.
pub const RESPONSE_STATUS_OFFSET: usize = 2;
/// Response offset of the echoed 2-byte command identifier.
pub const RESPONSE_COMMAND_ID_OFFSET: usize = 4;
/// Response offset of the 16-byte tag identifier (byte 6 is reserved).
pub const RESPONSE_TAG_ID_OFFSET: usize = 7;
/// Response offset of the 8-byte nonce.
pub const RESPONSE_NONCE_OFFSET: usize = 23;
/// Size of the fixed region covering header through nonce.
pub const RESPONSE_FIXED_LEN: usize = RESPONSE_NONCE_OFFSET + NONCE_LEN;
/// Smallest response that still carries a status code.
pub const RESPONSE_MIN_LEN: usize = 6;
/// Prefix skipped before the TLV payload of a data-bearing response.
pub const RESPONSE_PAYLOAD_PREFIX: usize = 10;
/// Trailing footer after the TLV payload.
pub const RESPONSE_FOOTER_LEN: usize = 2;

/// Application-layer success sentinel carried in the status-code slot.
pub const STATUS_SUCCESS: [u8; 2] = [0x00, 0x20];
/// Generic failure.
pub const STATUS_GENERIC_ERROR: [u8; 2] = [0x00, 0x40];
/// Malformed command.
pub const STATUS_MALFORMED: [u8; 2] = [0x01, 0x40];
/// Unsupported apiVersion field.
pub const STATUS_UNSUPPORTED_API_VERSION: [u8; 2] = [0x02, 0x40];
/// Tag identifier does not match the session.
pub const STATUS_INVALID_TAG_ID: [u8; 2] = [0x03, 0x40];
/// Nonce does not match the session.
pub const STATUS_INVALID_NONCE: [u8; 2] = [0x04, 0x40];
/// Command identifier not recognized by the tag.
pub const STATUS_UNKNOWN_COMMAND_ID: [u8; 2] = [0x05, 0x40];
/// Command shorter than the fixed request layout.
pub const STATUS_COMMAND_TOO_SHORT: [u8; 2] = [0x06, 0x40];
/// Signature rejected.
pub const STATUS_INVALID_SIGNATURE: [u8; 2] = [0x07, 0x40];
/// Response deferred; fetch it with GetPreviousResponse.
pub const STATUS_INCOMPLETE_RESPONSE: [u8; 2] = [0x0A, 0x40];

/// Terminator byte closing a TLV flight record.
pub const TLV_TERMINATOR: u8 = 0xFF;
