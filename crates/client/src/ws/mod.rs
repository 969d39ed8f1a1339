//! Push-refresh WebSocket.
//!
//! The server sends a text frame whenever something changed on its side; the
//! payload is never interpreted. Each frame re-fetches accounts and posts.
//!
//! ```text
//!   Disconnected ──open──▶ Connected ──close(code ≠ 4000)──▶ ClosedPendingReconnect
//!                              ▲                                    │
//!                              └────────── after 3s ────────────────┘
//!                  close(4000) ──▶ Terminated
//! ```

pub mod connection;
pub mod manager;

pub use connection::{
    run_connection_loop, CloseAction, ConnectionState, ReconnectPolicy,
};
pub use manager::{PushRefresh, WS_STATE};
