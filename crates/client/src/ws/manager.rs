//! Component that owns the push-refresh socket for the dashboard.

use dioxus::prelude::*;

use super::connection::{run_connection_loop, ConnectionState, ReconnectPolicy};
use crate::actions::Refresh;
use crate::auth_session::AuthContext;
use crate::hooks::use_refresh_signals;
use crate::storage;

/// Current socket state, for the status badge.
pub static WS_STATE: GlobalSignal<ConnectionState> = Signal::global(|| ConnectionState::Disconnected);

/// Opens the socket once on mount. Without a token the feature is off.
#[component]
pub fn PushRefresh(children: Element) -> Element {
    let auth = use_context::<AuthContext>();
    let refresh = use_refresh_signals();

    use_hook(move || {
        if !auth.session.peek().is_authenticated() {
            crate::log_warn!("No authentication token found. Not connecting to WebSocket.");
            return;
        }

        let config = auth.config.peek().clone();
        spawn(async move {
            // The token is re-read from storage on every attempt.
            let url_builder = move || storage::load_token().map(|token| config.ws_url(&token));
            let on_message = move |_payload: String| refresh.apply(Refresh::PUSH);
            let on_state = |state: ConnectionState| *WS_STATE.write() = state;

            run_connection_loop(url_builder, ReconnectPolicy::default(), on_message, on_state).await;
        });
    });

    children
}
