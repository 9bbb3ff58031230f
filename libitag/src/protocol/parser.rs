// libitag/src/protocol/parser.rs

use crate::types::{Nonce, TagId};
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a 2-byte field at `idx` with bounds checking.
pub fn pair_at(data: &[u8], idx: usize) -> Result<[u8; 2]> {
    ensure_len(data, idx + 2)?;
    Ok([data[idx], data[idx + 1]])
}

/// Parse a TagId (16 bytes) at `start` index with bounds checking.
pub fn tag_id_at(data: &[u8], start: usize) -> Result<TagId> {
    let s = slice_at(data, start, crate::constants::TAG_ID_LEN)?;
    TagId::try_from(s)
}

/// Parse a Nonce (8 bytes) at `start` index with bounds checking.
pub fn nonce_at(data: &[u8], start: usize) -> Result<Nonce> {
    let s = slice_at(data, start, crate::constants::NONCE_LEN)?;
    Nonce::try_from(s)
}
