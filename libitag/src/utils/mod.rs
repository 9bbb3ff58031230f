// libitag/src/utils/mod.rs

pub mod hex;

pub use hex::{bytes_to_hex, bytes_to_hex_spaced};
