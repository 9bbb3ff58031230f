// libitag/src/error.rs

use thiserror::Error;

use crate::flight::FieldError;
use crate::protocol::status::ApduError;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("tag error: {0}")]
    Apdu(#[from] ApduError),

    #[error("flight data error: {0}")]
    Field(#[from] FieldError),

    #[error("invalid buffer length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("{field} is {len} bytes, tlv fields carry at most 255")]
    FieldTooLong { field: &'static str, len: usize },

    #[error("operation timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
