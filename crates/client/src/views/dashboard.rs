//! Dashboard page: header plus every section.

use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::components::ui::{Button, ButtonVariant};
use crate::panels::ConnectionList;
use crate::ws::{ConnectionState, WS_STATE};

use super::{AccountsPanel, ConnectionsPanel, PostsPanel, SchedulePostForm};

#[component]
pub fn Dashboard() -> Element {
    let mut auth = use_context::<AuthContext>();

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-6",
            header { class: "flex items-center justify-between mb-8",
                h1 { class: "text-3xl font-bold", "Social Dashboard" }
                div { class: "flex items-center gap-4",
                    ConnectionBadge {}
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| auth.logout(),
                        "Log out"
                    }
                }
            }
            div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                div { class: "space-y-6",
                    AccountsPanel {}
                }
                div { class: "space-y-6 lg:col-span-2",
                    SchedulePostForm {}
                    PostsPanel {}
                }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6 mt-6",
                ConnectionsPanel { list: ConnectionList::Followers }
                ConnectionsPanel { list: ConnectionList::Following }
            }
        }
    }
}

/// Live / reconnecting / offline indicator for the push socket.
#[component]
pub fn ConnectionBadge() -> Element {
    let state = WS_STATE.cloned();
    let (dot, label) = match state {
        ConnectionState::Connected => ("bg-green-500", "Live"),
        ConnectionState::Connecting | ConnectionState::ClosedPendingReconnect { .. } => {
            ("bg-yellow-500", "Reconnecting")
        }
        ConnectionState::Disconnected | ConnectionState::Terminated => ("bg-gray-500", "Offline"),
    };

    rsx! {
        span { class: "flex items-center gap-2 text-sm text-gray-400",
            span { class: "w-2 h-2 rounded-full {dot}" }
            "{label}"
        }
    }
}
