// libitag/src/flight/mod.rs

pub mod codec;
pub mod data;
pub mod field;

pub use codec::{decode, encode};
pub use data::{FieldError, FlightData};
pub use field::FieldType;
