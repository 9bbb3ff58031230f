// libitag/src/protocol/command.rs

use crate::constants;
use crate::layout::{self, LayoutType};
use crate::types::TagContext;

/// High-level Command enum. Each variant maps to one fixed 2-byte command
/// identifier on the wire.
#[derive(Debug, Clone)]
pub enum Command {
    /// Establishes the session context; sent with a zero tagId/nonce.
    GetTagId,
    /// Writes one of the embedded layout blobs to the tag.
    UpdateLayout { layout: LayoutType },
    /// Writes an encoded flight record (or arbitrary payload) to the tag.
    UpdateData { payload: Vec<u8> },
    /// Reads the flight record stored on the tag.
    GetFlightData,
    /// Asks the tag to retransmit the response it deferred.
    GetPreviousResponse,
}

impl Command {
    /// Return the 2-byte command identifier for this command.
    pub fn command_id(&self) -> [u8; 2] {
        match self {
            Self::GetTagId => constants::CMD_GET_TAG_ID,
            Self::UpdateLayout { .. } => constants::CMD_UPDATE_LAYOUT,
            Self::UpdateData { .. } => constants::CMD_UPDATE_DATA,
            Self::GetFlightData => constants::CMD_GET_FLIGHT_DATA,
            Self::GetPreviousResponse => constants::CMD_GET_PREVIOUS_RESPONSE,
        }
    }

    /// The payload carried by this command. Read/retransmit commands carry
    /// none.
    pub fn payload(&self) -> &[u8] {
        match self {
            Self::UpdateLayout { layout } => &layout::lookup(*layout).payload,
            Self::UpdateData { payload } => payload,
            Self::GetTagId | Self::GetFlightData | Self::GetPreviousResponse => &[],
        }
    }

    /// Encode the command into a full request buffer.
    ///
    /// GetTagId ignores `context` and always goes out with the zero
    /// tagId/nonce, since it is the command that establishes a context.
    /// Construction cannot fail; the caller guarantees the payload stays
    /// under 65536 bytes (the length field wraps above that).
    pub fn encode(&self, context: &TagContext) -> Vec<u8> {
        let context = match self {
            Self::GetTagId => &TagContext::ZERO,
            _ => context,
        };
        encode_request(self.command_id(), context, self.payload())
    }
}

/// Encode a payload length as the two-byte little-endian wire field.
pub fn payload_length_bytes(len: usize) -> [u8; 2] {
    [(len & 0xFF) as u8, ((len >> 8) & 0xFF) as u8]
}

/// Assemble a request buffer in the fixed wire order:
/// originType(1) | apiVersion(3, zero) | tagId(16) | nonce(8) | commandId(2)
/// | payloadLength(2, LE) | payload | signature(64, zero).
///
/// Total length is always `COMMAND_FIXED_LEN` (96) plus the payload length.
pub fn encode_request(command_id: [u8; 2], context: &TagContext, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(constants::COMMAND_FIXED_LEN + payload.len());
    buf.push(constants::ORIGIN_TYPE);
    buf.extend_from_slice(&[0u8; constants::API_VERSION_LEN]);
    buf.extend_from_slice(context.tag_id.as_bytes());
    buf.extend_from_slice(context.nonce.as_bytes());
    buf.extend_from_slice(&command_id);
    buf.extend_from_slice(&payload_length_bytes(payload.len()));
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&[0u8; constants::SIGNATURE_LEN]);
    buf
}
