// libitag/src/prelude.rs

//! Convenience re-exports for the common public surface.

pub use crate::error::{Error, Result};
pub use crate::flight::{FieldError, FieldType, FlightData};
pub use crate::layout::{Layout, LayoutType};
pub use crate::protocol::{ApduError, Command, Response, classify};
pub use crate::session::TagSession;
pub use crate::transport::{MockTransport, Transport};
pub use crate::types::{Nonce, TagContext, TagId};
