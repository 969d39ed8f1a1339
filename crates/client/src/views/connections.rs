//! Followers and following lists.

use dioxus::prelude::*;

use crate::actions::{self, ActionOutcome};
use crate::auth_session::AuthContext;
use crate::components::ui::AvatarImage;
use crate::hooks::{use_refresh_signals, use_refreshable_resource};
use crate::panels::{connections_panel, ConnectionList, ConnectionRow, ListPanel};
use crate::shell::BrowserDialogs;

#[component]
pub fn ConnectionsPanel(list: ConnectionList) -> Element {
    let auth = use_context::<AuthContext>();
    let refresh = use_refresh_signals();
    let trigger = match list {
        ConnectionList::Followers => refresh.followers,
        ConnectionList::Following => refresh.following,
    };

    let connections = use_refreshable_resource(trigger, move || {
        let client = auth.client();
        async move {
            let res = match list {
                ConnectionList::Followers => client.list_followers().await,
                ConnectionList::Following => client.list_following().await,
            };
            connections_panel(res)
        }
    });

    let panel = connections.cloned().unwrap_or(ListPanel::Loading);
    let (headline, hint) = list.empty_message();
    let title = match list {
        ConnectionList::Followers => "Followers",
        ConnectionList::Following => "Following",
    };

    rsx! {
        section {
            h2 { class: "text-xl font-bold mb-4", "{title}" }
            ul { id: list.container_id(), class: "space-y-3",
                match panel {
                    ListPanel::Loading => rsx! {
                        li { class: "bg-gray-800 p-4 rounded-2xl border border-gray-700 text-gray-400 text-center",
                            "Loading..."
                        }
                    },
                    ListPanel::Empty => rsx! {
                        li { class: "bg-gray-800 p-6 rounded-2xl shadow-inner border border-gray-700 text-gray-400 text-center",
                            p { class: "text-lg mb-2", "{headline}" }
                            p { class: "text-sm", "{hint}" }
                        }
                    },
                    ListPanel::Failed => rsx! {
                        li { class: "bg-gray-800 p-4 rounded-2xl shadow-lg border border-gray-700 text-red-400 text-center",
                            "{list.error_message()}"
                        }
                    },
                    ListPanel::Items(rows) => rsx! {
                        for (idx, row) in rows.into_iter().enumerate() {
                            ConnectionItem { key: "{idx}", list, row }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ConnectionItem(list: ConnectionList, row: ConnectionRow) -> Element {
    let auth = use_context::<AuthContext>();
    let refresh = use_refresh_signals();

    let button_class = match list {
        ConnectionList::Followers => "bg-red-500 hover:bg-red-600",
        ConnectionList::Following => "bg-gray-600 hover:bg-gray-700",
    };
    let icon = match list {
        ConnectionList::Followers => "fa-solid fa-user-minus",
        ConnectionList::Following => "fa-solid fa-user-xmark",
    };

    let target = row.username.clone();
    let on_unfollow = move |_: MouseEvent| {
        let Some(username) = target.clone() else {
            return;
        };
        spawn(async move {
            let client = auth.client();
            if let ActionOutcome::Completed(r) =
                actions::unfollow(&client, &BrowserDialogs, &username).await
            {
                refresh.apply(r);
            }
        });
    };

    rsx! {
        li { class: "bg-gray-800 p-4 rounded-2xl shadow-lg border border-gray-700 flex items-center justify-between gap-4 hover:bg-gray-700 transition",
            div { class: "flex items-center gap-4",
                AvatarImage { avatar: row.avatar.clone() }
                div { class: "flex-grow",
                    p { class: "text-gray-200 font-semibold", "{row.handle}" }
                    p { class: "text-gray-400 text-sm", "{row.name}" }
                }
            }
            button {
                class: "{button_class} text-white font-bold py-1 px-4 rounded-full text-sm transition",
                disabled: row.username.is_none(),
                onclick: on_unfollow,
                i { class: icon }
                " Unfollow"
            }
        }
    }
}
