// libitag/src/protocol/status.rs

use thiserror::Error;

use crate::constants;

/// Errors reported by the tag, plus the two framing conditions raised from
/// buffer shape alone (`EmptyResponse`, `MissingDataInResponse`).
///
/// Variants compare structurally; two errors are equal iff they are the same
/// kind, not when their rendered messages happen to match.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApduError {
    #[error("generic error")]
    GenericError,

    #[error("malformed command")]
    Malformed,

    #[error("unsupported api version")]
    UnsupportedApiVersion,

    #[error("invalid tag id")]
    InvalidTagId,

    #[error("invalid nonce")]
    InvalidNonce,

    #[error("unknown command id")]
    UnknownCommandId,

    #[error("command too short")]
    CommandTooShort,

    #[error("invalid signature")]
    InvalidSignature,

    /// Not terminal: the tag deferred a large response. The session layer
    /// answers this with a single GetPreviousResponse.
    #[error("incomplete response")]
    IncompleteResponse,

    #[error("empty response")]
    EmptyResponse,

    #[error("missing data in response")]
    MissingDataInResponse,
}

/// Map a 2-byte device status code to its error kind.
///
/// Pure, total function: anything outside the documented table collapses to
/// `GenericError`.
pub fn classify(code: [u8; 2]) -> ApduError {
    match code {
        constants::STATUS_GENERIC_ERROR => ApduError::GenericError,
        constants::STATUS_MALFORMED => ApduError::Malformed,
        constants::STATUS_UNSUPPORTED_API_VERSION => ApduError::UnsupportedApiVersion,
        constants::STATUS_INVALID_TAG_ID => ApduError::InvalidTagId,
        constants::STATUS_INVALID_NONCE => ApduError::InvalidNonce,
        constants::STATUS_UNKNOWN_COMMAND_ID => ApduError::UnknownCommandId,
        constants::STATUS_COMMAND_TOO_SHORT => ApduError::CommandTooShort,
        constants::STATUS_INVALID_SIGNATURE => ApduError::InvalidSignature,
        constants::STATUS_INCOMPLETE_RESPONSE => ApduError::IncompleteResponse,
        _ => ApduError::GenericError,
    }
}
