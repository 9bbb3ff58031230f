// libitag/src/lib.rs

//! libitag
//!
//! Pure Rust codec for iTag flight-data smart tags: request assembly,
//! response parsing, status classification, the TLV flight record, and the
//! one-shot continuation protocol, over any `Transport` implementation.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod flight;
pub mod layout;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
