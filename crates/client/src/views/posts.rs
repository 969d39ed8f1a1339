//! Published feed, scheduled queue and the schedule form.

use dioxus::prelude::*;

use crate::actions::{self, ActionOutcome};
use crate::auth_session::AuthContext;
use crate::components::ui::Button;
use crate::hooks::{use_refresh_signals, use_refreshable_resource};
use crate::panels::{ListPanel, PostBoard, PostCard, PostSection};
use crate::shell::BrowserDialogs;

const CARD_CLASS: &str = "bg-gray-800 p-6 rounded-2xl shadow-lg border border-gray-700";

/// Both post sections, filled from one `/tweets` fetch.
#[component]
pub fn PostsPanel() -> Element {
    let auth = use_context::<AuthContext>();
    let refresh = use_refresh_signals();

    let posts = use_refreshable_resource(refresh.posts, move || {
        let client = auth.client();
        async move { PostBoard::from_fetch(client.list_posts().await) }
    });

    let board = posts.cloned().unwrap_or_else(PostBoard::loading);

    rsx! {
        section { id: "feed",
            h2 { class: "text-xl font-bold mb-4", "Recent Posts" }
            PostList { section: PostSection::Feed, panel: board.feed }
        }
        section { id: "schedule",
            h2 { class: "text-xl font-bold mb-4", "Scheduled Posts" }
            PostList { section: PostSection::Schedule, panel: board.schedule }
        }
    }
}

/// Shared renderer for either section.
#[component]
pub fn PostList(section: PostSection, panel: ListPanel<PostCard>) -> Element {
    rsx! {
        div { id: section.container_id(),
            match panel {
                ListPanel::Loading => rsx! {
                    div { class: CARD_CLASS,
                        p { class: "text-gray-400", "Loading..." }
                    }
                },
                ListPanel::Empty => rsx! {
                    div { class: CARD_CLASS,
                        p { class: "text-gray-400", "{section.empty_message()}" }
                    }
                },
                ListPanel::Failed => rsx! {
                    div { class: CARD_CLASS,
                        p { class: "text-red-400", "{section.error_message()}" }
                    }
                },
                ListPanel::Items(cards) => rsx! {
                    for card in cards {
                        div { class: "{CARD_CLASS} mt-4",
                            p { class: "text-gray-200 mb-2", "{card.text}" }
                            p { class: "text-gray-500 text-sm", "Status: {card.status_text}" }
                        }
                    }
                },
            }
        }
    }
}

#[component]
pub fn SchedulePostForm() -> Element {
    let auth = use_context::<AuthContext>();
    let refresh = use_refresh_signals();
    let mut content = use_signal(String::new);
    let mut scheduled_time = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);

    let on_schedule = move |_: MouseEvent| {
        is_submitting.set(true);
        spawn(async move {
            let client = auth.client();
            let outcome =
                actions::schedule_post(&client, &BrowserDialogs, &content(), &scheduled_time())
                    .await;
            is_submitting.set(false);
            if let ActionOutcome::Completed(r) = outcome {
                content.set(String::new());
                scheduled_time.set(String::new());
                refresh.apply(r);
            }
        });
    };

    rsx! {
        section { id: "compose", class: "{CARD_CLASS} space-y-3",
            h2 { class: "text-xl font-bold", "Schedule a Post" }
            textarea {
                id: "post-content",
                class: "w-full bg-gray-900 rounded-lg p-2",
                placeholder: "What's happening?",
                value: "{content}",
                oninput: move |evt| content.set(evt.value()),
            }
            input {
                id: "scheduled-time",
                r#type: "datetime-local",
                class: "w-full bg-gray-900 rounded-lg p-2",
                value: "{scheduled_time}",
                oninput: move |evt| scheduled_time.set(evt.value()),
            }
            Button { disabled: is_submitting(), onclick: on_schedule, "Schedule" }
        }
    }
}
