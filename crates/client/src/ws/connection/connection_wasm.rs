//! Browser WebSocket loop using `web_sys::WebSocket`.

use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::StreamExt;
use socialdash_shared::CLOSE_ABNORMAL;
use wasm_bindgen::prelude::*;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use super::{CloseAction, ConnectionState, ReconnectPolicy};

/// Socket callbacks, funnelled into one channel.
enum SocketSignal {
    Open,
    Message(String),
    Close(u16),
}

/// Keeps the JS callbacks alive for as long as the socket is in use and
/// detaches them afterwards.
struct AttachedSocket {
    ws: WebSocket,
    _onopen: Closure<dyn FnMut(web_sys::Event)>,
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
    _onclose: Closure<dyn FnMut(CloseEvent)>,
    _onerror: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for AttachedSocket {
    fn drop(&mut self) {
        self.ws.set_onopen(None);
        self.ws.set_onmessage(None);
        self.ws.set_onclose(None);
        self.ws.set_onerror(None);
    }
}

fn attach(url: &str, tx: UnboundedSender<SocketSignal>) -> Result<AttachedSocket, String> {
    let ws = WebSocket::new(url).map_err(|e| format!("Failed to create WebSocket: {:?}", e))?;

    let open_tx = tx.clone();
    let onopen = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let _ = open_tx.unbounded_send(SocketSignal::Open);
    }) as Box<dyn FnMut(web_sys::Event)>);
    ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));

    let message_tx = tx.clone();
    let onmessage = Closure::wrap(Box::new(move |e: MessageEvent| {
        let payload = e.data().as_string().unwrap_or_default();
        let _ = message_tx.unbounded_send(SocketSignal::Message(payload));
    }) as Box<dyn FnMut(MessageEvent)>);
    ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

    let onclose = Closure::wrap(Box::new(move |e: CloseEvent| {
        let _ = tx.unbounded_send(SocketSignal::Close(e.code()));
    }) as Box<dyn FnMut(CloseEvent)>);
    ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));

    // Errors are always followed by a close event, which carries the code.
    let onerror = Closure::wrap(Box::new(move |_: web_sys::Event| {
        crate::log_error!("WebSocket error");
    }) as Box<dyn FnMut(web_sys::Event)>);
    ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    Ok(AttachedSocket {
        ws,
        _onopen: onopen,
        _onmessage: onmessage,
        _onclose: onclose,
        _onerror: onerror,
    })
}

async fn pump(
    rx: &mut UnboundedReceiver<SocketSignal>,
    on_message: &mut impl FnMut(String),
    on_state: &mut impl FnMut(ConnectionState),
) -> u16 {
    while let Some(signal) = rx.next().await {
        match signal {
            SocketSignal::Open => {
                crate::log_info!("WebSocket connected for real-time updates.");
                on_state(ConnectionState::Connected);
            }
            SocketSignal::Message(payload) => {
                crate::log_info!("Received a message from the server: {}", payload);
                on_message(payload);
            }
            SocketSignal::Close(code) => return code,
        }
    }
    CLOSE_ABNORMAL
}

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

        let (tx, mut rx) = unbounded();
        let code = match attach(&url, tx) {
            Ok(socket) => {
                let code = pump(&mut rx, &mut on_message, &mut on_state).await;
                drop(socket);
                code
            }
            Err(e) => {
                crate::log_error!("{}", e);
                CLOSE_ABNORMAL
            }
        };

        crate::log_info!("WebSocket connection closed: code {}", code);
        on_state(policy.state_after_close(code));

        match policy.on_close(code) {
            CloseAction::Reconnect { after } => {
                crate::log_info!("Reconnecting in {}ms", after.as_millis());
                gloo_timers::future::sleep(after).await;
            }
            CloseAction::Stop => {
                crate::log_error!("Connection closed due to invalid token. Please log in again.");
                return;
            }
        }
    }
}
