// libitag/src/types.rs

use crate::Error;
use crate::constants::{NONCE_LEN, TAG_ID_LEN};
use std::convert::TryFrom;

/// TagId - Newtype Pattern (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId([u8; TAG_ID_LEN]);

impl TagId {
    /// All-zero tag identifier used by GetTagId before a session exists.
    pub const ZERO: Self = Self([0u8; TAG_ID_LEN]);

    pub const fn from_bytes(bytes: [u8; TAG_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; TAG_ID_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for TagId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != TAG_ID_LEN {
            return Err(Error::InvalidLength {
                expected: TAG_ID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; TAG_ID_LEN];
        arr.copy_from_slice(&bytes[..TAG_ID_LEN]);
        Ok(Self(arr))
    }
}

/// Nonce - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_LEN]);

impl Nonce {
    /// All-zero nonce used by GetTagId before a session exists.
    pub const ZERO: Self = Self([0u8; NONCE_LEN]);

    pub const fn from_bytes(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != NONCE_LEN {
            return Err(Error::InvalidLength {
                expected: NONCE_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; NONCE_LEN];
        arr.copy_from_slice(&bytes[..NONCE_LEN]);
        Ok(Self(arr))
    }
}

/// Session context returned by a successful GetTagId exchange.
///
/// Every command after GetTagId must echo this pair unmodified. The value is
/// owned by the session: it is replaced wholesale on reconnect, never
/// mutated, and never persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagContext {
    pub tag_id: TagId,
    pub nonce: Nonce,
}

impl TagContext {
    /// Zero context sent with GetTagId, the command that establishes one.
    pub const ZERO: Self = Self {
        tag_id: TagId::ZERO,
        nonce: Nonce::ZERO,
    };

    pub fn new(tag_id: TagId, nonce: Nonce) -> Self {
        Self { tag_id, nonce }
    }
}
