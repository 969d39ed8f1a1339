//! socialdash - main entry point.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use socialdash_client::{
    auth_session::AuthProvider, config::ClientConfig, hooks::use_refresh_provider,
    views::Dashboard, ws::PushRefresh,
};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("socialdash_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| ClientConfig::load().map_err(|e| format!("{e:#}")));

    match config {
        Ok(config) => rsx! {
            AuthProvider { config,
                RefreshScope {
                    PushRefresh {
                        Dashboard {}
                    }
                }
            }
        },
        Err(e) => {
            socialdash_client::log_error!("Invalid client configuration: {}", e);
            rsx! {
                div { class: "p-6 text-red-400", "Configuration error: {e}" }
            }
        }
    }
}

/// Owns the per-list refresh triggers.
#[component]
fn RefreshScope(children: Element) -> Element {
    use_refresh_provider();
    children
}
