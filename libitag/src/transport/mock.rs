// libitag/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent command buffers and
/// returns queued response buffers in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// Testing hook: number of transmit calls that should fail with Timeout
    pub failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response buffer for a future transmit call.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Set how many subsequent transmit calls should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(command.to_vec());

        if self.failures > 0 {
            self.failures -= 1;
            return Err(Error::Timeout);
        }

        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }
}
