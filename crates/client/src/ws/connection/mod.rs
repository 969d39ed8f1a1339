//! Connection state and reconnect policy, plus the platform-specific loop.

use std::time::Duration;

use socialdash_shared::{CLOSE_INVALID_TOKEN, RECONNECT_DELAY};

#[cfg(not(target_arch = "wasm32"))]
mod connection_native;
#[cfg(not(target_arch = "wasm32"))]
pub use connection_native::run_connection_loop;

#[cfg(target_arch = "wasm32")]
mod connection_wasm;
#[cfg(target_arch = "wasm32")]
pub use connection_wasm::run_connection_loop;

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    /// Closed with `code`; one reconnect attempt is pending.
    ClosedPendingReconnect { code: u16 },
    /// Closed with the invalid-token code. No further attempts.
    Terminated,
}

/// What to do after the socket closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    Reconnect { after: Duration },
    Stop,
}

/// Fixed-delay, unbounded retry with one terminal close code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    pub delay: Duration,
    pub terminal_code: u16,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            delay: RECONNECT_DELAY,
            terminal_code: CLOSE_INVALID_TOKEN,
        }
    }
}

impl ReconnectPolicy {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn on_close(&self, code: u16) -> CloseAction {
        if code == self.terminal_code {
            CloseAction::Stop
        } else {
            CloseAction::Reconnect { after: self.delay }
        }
    }

    /// State to enter after a close with `code`.
    pub fn state_after_close(&self, code: u16) -> ConnectionState {
        match self.on_close(code) {
            CloseAction::Reconnect { .. } => ConnectionState::ClosedPendingReconnect { code },
            CloseAction::Stop => ConnectionState::Terminated,
        }
    }
}
