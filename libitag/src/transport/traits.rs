// libitag/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the physical tag channel away from the codec.
///
/// Implementations own discovery, connection, and timeout policy; the codec
/// only requires that one command buffer goes out and one response buffer
/// (or a transport error) comes back. At most one exchange is in flight per
/// session. Invalidating the underlying session mid-exchange surfaces here
/// as an error, never as a panic.
pub trait Transport {
    /// Send a command buffer and return the raw response buffer.
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        (**self).transmit(command)
    }
}
