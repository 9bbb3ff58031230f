// libitag/src/protocol/response.rs

use crate::constants;
use crate::protocol::parser;
use crate::protocol::status::{self, ApduError};
use crate::types::TagContext;
use crate::Result;

/// A response buffer decomposed along the fixed wire offsets.
///
/// Layout: header `[0..2]`, statusCode `[2..4]`, commandId `[4..6]`, byte 6
/// reserved, tagId `[7..23]`, nonce `[23..31]`. Data-bearing responses carry
/// their TLV payload between a fixed 10-byte prefix and a trailing 2-byte
/// footer; the tagId/nonce region is only meaningful for GetTagId responses,
/// so the two views overlap by design of the device.
#[derive(Debug, Clone)]
pub struct Response {
    header: [u8; 2],
    status_code: [u8; 2],
    command_id: [u8; 2],
    context: Option<TagContext>,
    payload: Vec<u8>,
}

impl Response {
    /// Decompose a raw response buffer.
    ///
    /// Requires at least the 6 bytes covering header/status/commandId;
    /// shorter buffers fail with the framing error kinds. The tag context is
    /// extracted only when the buffer covers the full fixed region.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        if raw.is_empty() {
            return Err(ApduError::EmptyResponse.into());
        }
        if raw.len() < constants::RESPONSE_MIN_LEN {
            return Err(ApduError::MissingDataInResponse.into());
        }

        let header = parser::pair_at(raw, constants::RESPONSE_HEADER_OFFSET)?;
        let status_code = parser::pair_at(raw, constants::RESPONSE_STATUS_OFFSET)?;
        let command_id = parser::pair_at(raw, constants::RESPONSE_COMMAND_ID_OFFSET)?;

        let context = if raw.len() >= constants::RESPONSE_FIXED_LEN {
            Some(TagContext::new(
                parser::tag_id_at(raw, constants::RESPONSE_TAG_ID_OFFSET)?,
                parser::nonce_at(raw, constants::RESPONSE_NONCE_OFFSET)?,
            ))
        } else {
            None
        };

        Ok(Self {
            header,
            status_code,
            command_id,
            context,
            payload: Self::payload_slice(raw).to_vec(),
        })
    }

    /// True iff the status-code slot carries the success sentinel.
    pub fn is_success(raw: &[u8]) -> bool {
        match parser::pair_at(raw, constants::RESPONSE_STATUS_OFFSET) {
            Ok(code) => code == constants::STATUS_SUCCESS,
            Err(_) => false,
        }
    }

    /// Classify a non-success buffer into an error kind.
    ///
    /// Framing checks run before any status lookup: an empty buffer is
    /// `EmptyResponse`, a buffer too short to carry a status code is
    /// `MissingDataInResponse`.
    pub fn classify_error(raw: &[u8]) -> ApduError {
        if raw.is_empty() {
            return ApduError::EmptyResponse;
        }
        if raw.len() < constants::RESPONSE_MIN_LEN {
            return ApduError::MissingDataInResponse;
        }
        status::classify([
            raw[constants::RESPONSE_STATUS_OFFSET],
            raw[constants::RESPONSE_STATUS_OFFSET + 1],
        ])
    }

    /// The TLV region of a raw buffer: everything after the 10-byte prefix
    /// and before the 2-byte footer. Empty when the buffer is too small to
    /// carry one.
    fn payload_slice(raw: &[u8]) -> &[u8] {
        let min = constants::RESPONSE_PAYLOAD_PREFIX + constants::RESPONSE_FOOTER_LEN;
        if raw.len() > min {
            &raw[constants::RESPONSE_PAYLOAD_PREFIX..raw.len() - constants::RESPONSE_FOOTER_LEN]
        } else {
            &[]
        }
    }

    /// Raw header bytes.
    pub fn header(&self) -> [u8; 2] {
        self.header
    }

    /// Raw status code.
    pub fn status_code(&self) -> [u8; 2] {
        self.status_code
    }

    /// Command id echoed by the tag.
    pub fn command_id(&self) -> [u8; 2] {
        self.command_id
    }

    /// Session context echoed in the fixed region, when the buffer covers it.
    pub fn context(&self) -> Option<TagContext> {
        self.context
    }

    /// TLV payload region.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}
