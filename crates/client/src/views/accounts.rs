//! Linked accounts list and the add-account form.

use dioxus::prelude::*;

use crate::actions::{self, ActionOutcome};
use crate::auth_session::AuthContext;
use crate::components::ui::{Button, ButtonVariant};
use crate::hooks::{use_refresh_signals, use_refreshable_resource};
use crate::panels::{accounts_panel, AccountRow, ListPanel, ACCOUNTS_EMPTY, ACCOUNTS_ERROR};
use crate::shell::BrowserDialogs;

const ROW_CLASS: &str = "bg-gray-800 p-4 rounded-xl shadow border border-gray-700";

#[component]
pub fn AccountsPanel() -> Element {
    let auth = use_context::<AuthContext>();
    let refresh = use_refresh_signals();
    let mut show_form = use_signal(|| false);

    let accounts = use_refreshable_resource(refresh.accounts, move || {
        let client = auth.client();
        async move { accounts_panel(client.list_accounts().await) }
    });

    let panel = accounts.cloned().unwrap_or(ListPanel::Loading);

    rsx! {
        section { id: "accounts",
            h2 { class: "text-xl font-bold mb-4", "Linked Accounts" }
            ul { id: "accounts-list", class: "space-y-3",
                match panel {
                    ListPanel::Loading => rsx! {
                        li { class: "{ROW_CLASS} text-gray-400", "Loading accounts..." }
                    },
                    ListPanel::Empty => rsx! {
                        li { class: "{ROW_CLASS} text-gray-400", "{ACCOUNTS_EMPTY}" }
                    },
                    ListPanel::Failed => rsx! {
                        li { class: "{ROW_CLASS} text-red-400", "{ACCOUNTS_ERROR}" }
                    },
                    ListPanel::Items(rows) => rsx! {
                        for row in rows {
                            AccountItem { key: "{row.platform}/{row.username}", row: row.clone() }
                        }
                    },
                }
            }
            Button {
                class: "w-full mt-4".to_string(),
                onclick: move |_| show_form.set(true),
                "➕ Add New Account"
            }
            if show_form() {
                AddAccountForm { on_close: move |_| show_form.set(false) }
            }
        }
    }
}

#[component]
fn AccountItem(row: AccountRow) -> Element {
    let auth = use_context::<AuthContext>();
    let refresh = use_refresh_signals();

    let on_delete = {
        let row = row.clone();
        move |_: MouseEvent| {
            let platform = row.platform.clone();
            let username = row.username.clone();
            spawn(async move {
                let client = auth.client();
                let outcome =
                    actions::delete_account(&client, &BrowserDialogs, &platform, &username).await;
                if let ActionOutcome::Completed(r) = outcome {
                    refresh.apply(r);
                }
            });
        }
    };

    rsx! {
        li { class: "{ROW_CLASS} flex justify-between items-center",
            div {
                span { "{row.handle}" }
                span { class: "text-gray-400 text-sm block", "{row.stats}" }
            }
            button {
                class: "text-red-500 hover:text-red-600 ml-4 font-bold",
                title: "Delete account",
                onclick: on_delete,
                i { class: "fa-solid fa-trash-can" }
            }
        }
    }
}

/// Platform + username form. Hidden again after a successful add.
#[component]
pub fn AddAccountForm(on_close: EventHandler<()>) -> Element {
    let auth = use_context::<AuthContext>();
    let refresh = use_refresh_signals();
    let mut platform = use_signal(|| "twitter".to_string());
    let mut username = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        is_submitting.set(true);
        spawn(async move {
            let client = auth.client();
            let outcome =
                actions::add_account(&client, &BrowserDialogs, &platform(), &username()).await;
            is_submitting.set(false);
            if let ActionOutcome::Completed(r) = outcome {
                username.set(String::new());
                on_close.call(());
                refresh.apply(r);
            }
        });
    };

    rsx! {
        form {
            id: "add-account-form",
            class: "mt-4 bg-gray-800 p-4 rounded-xl border border-gray-700 space-y-3",
            onsubmit: on_submit,
            select {
                name: "platform",
                class: "w-full bg-gray-900 rounded-lg p-2",
                value: "{platform}",
                onchange: move |evt| platform.set(evt.value()),
                option { value: "twitter", "Twitter" }
                option { value: "instagram", "Instagram" }
                option { value: "tiktok", "TikTok" }
            }
            input {
                name: "username",
                class: "w-full bg-gray-900 rounded-lg p-2",
                placeholder: "Username",
                required: true,
                value: "{username}",
                oninput: move |evt| username.set(evt.value()),
            }
            div { class: "flex gap-2",
                Button { r#type: "submit".to_string(), disabled: is_submitting(), "Link Account" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
            }
        }
    }
}
