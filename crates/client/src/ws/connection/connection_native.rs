//! Native WebSocket loop using tokio-tungstenite.

use futures_util::StreamExt;
use socialdash_shared::CLOSE_ABNORMAL;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

use super::{CloseAction, ConnectionState, ReconnectPolicy};

/// Close code when the peer closed without a status.
const CLOSE_NO_STATUS: u16 = 1005;

/// Connect, forward every text frame to `on_message`, and reconnect per
/// `policy` until a terminal close or until `url_builder` has no URL (no
/// token). Returns when the loop stops.
pub async fn run_connection_loop(
    url_builder: impl Fn() -> Option<String>,
    policy: ReconnectPolicy,
    mut on_message: impl FnMut(String),
    mut on_state: impl FnMut(ConnectionState),
) {
    loop {
        let Some(url) = url_builder() else {
            crate::log_warn!("No authentication token found. Not connecting to WebSocket.");
            on_state(ConnectionState::Disconnected);
            return;
        };

        on_state(ConnectionState::Connecting);

        let code = match connect_async(url.as_str()).await {
            Ok((stream, _response)) => {
                crate::log_info!("WebSocket connected for real-time updates.");
                on_state(ConnectionState::Connected);
                read_until_close(stream, &mut on_message).await
            }
            Err(e) => {
                crate::log_error!("WebSocket error: {}", e);
                CLOSE_ABNORMAL
            }
        };

        crate::log_info!("WebSocket connection closed: code {}", code);
        on_state(policy.state_after_close(code));

        match policy.on_close(code) {
            CloseAction::Reconnect { after } => {
                crate::log_info!("Reconnecting in {}ms", after.as_millis());
                tokio::time::sleep(after).await;
            }
            CloseAction::Stop => {
                crate::log_error!("Connection closed due to invalid token. Please log in again.");
                return;
            }
        }
    }
}

async fn read_until_close(
    mut stream: WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
    on_message: &mut impl FnMut(String),
) -> u16 {
    while let Some(msg) = stream.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                crate::log_info!("Received a message from the server: {}", text.as_str());
                on_message(text.as_str().to_owned());
            }
            Ok(Message::Binary(data)) => {
                crate::log_info!("Received a {}-byte binary message from the server", data.len());
                on_message(String::from_utf8_lossy(&data).into_owned());
            }
            Ok(Message::Close(frame)) => {
                return frame.map(|f| u16::from(f.code)).unwrap_or(CLOSE_NO_STATUS);
            }
            Ok(_) => {}
            Err(e) => {
                crate::log_error!("WebSocket read error: {}", e);
                return CLOSE_ABNORMAL;
            }
        }
    }
    CLOSE_ABNORMAL
}
