// libitag/src/protocol/mod.rs

pub mod command;
pub mod parser;
pub mod response;
pub mod status;

pub use command::{Command, encode_request, payload_length_bytes};
pub use response::Response;
pub use status::{ApduError, classify};
